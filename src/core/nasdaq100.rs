//! Nasdaq-100 constituents (plus the DOGE-USD pair) with company names and industries.

use crate::core::security::Security;

pub static NASDAQ_100: &[Security] = &[
    Security::new("AAPL", "Apple Inc.", "Technology"),
    Security::new("ABBV", "AbbVie Inc.", "Healthcare"),
    Security::new("ABMD", "Abiomed Inc.", "Healthcare"),
    Security::new("ACN", "Accenture plc", "Technology"),
    Security::new("ADBE", "Adobe Inc.", "Technology"),
    Security::new("ADI", "Analog Devices Inc.", "Technology"),
    Security::new("ADP", "Automatic Data Processing Inc.", "Business Services"),
    Security::new("ADSK", "Autodesk Inc.", "Technology"),
    Security::new("AEP", "American Electric Power Company Inc.", "Utilities"),
    Security::new("ALGN", "Align Technology Inc.", "Healthcare"),
    Security::new("AMAT", "Applied Materials Inc.", "Technology"),
    Security::new("AMD", "Advanced Micro Devices Inc.", "Technology"),
    Security::new("AMGN", "Amgen Inc.", "Healthcare"),
    Security::new("AMZN", "Amazon.com Inc.", "Retail"),
    Security::new("ANSS", "ANSYS Inc.", "Technology"),
    Security::new("ANTM", "Anthem Inc.", "Healthcare"),
    Security::new("ASML", "ASML Holding NV", "Technology"),
    Security::new("ATVI", "Activision Blizzard Inc.", "Technology"),
    Security::new("AVGO", "Broadcom Inc.", "Technology"),
    Security::new("BIDU", "Baidu Inc.", "Technology"),
    Security::new("BIIB", "Biogen Inc.", "Healthcare"),
    Security::new("BKNG", "Booking Holdings Inc.", "Travel & Hospitality"),
    Security::new("BMRN", "BioMarin Pharmaceutical Inc.", "Healthcare"),
    Security::new("BMY", "Bristol-Myers Squibb Company", "Healthcare"),
    Security::new("CDNS", "Cadence Design Systems Inc.", "Technology"),
    Security::new("CDW", "CDW Corp.", "Business Services"),
    Security::new("CERN", "Cerner Corp.", "Healthcare"),
    Security::new(
        "CHKP",
        "Check Point Software Technologies Ltd.",
        "Technology",
    ),
    Security::new("CHTR", "Charter Communications Inc.", "Telecom"),
    Security::new("CMCSA", "Comcast Corp.", "Telecom"),
    Security::new("CME", "CME Group Inc.", "Financial Services"),
    Security::new("COST", "Costco Wholesale Corp.", "Retail"),
    Security::new("CSCO", "Cisco Systems Inc.", "Technology"),
    Security::new("CSX", "CSX Corp.", "Transportation"),
    Security::new("CTAS", "Cintas Corp.", "Business Services"),
    Security::new("CTSH", "Cognizant Technology Solutions Corp.", "Technology"),
    Security::new("CTXS", "Citrix Systems Inc.", "Technology"),
    Security::new("DISCA", "Discovery Inc. Class A", "Media & Entertainment"),
    Security::new("DISCK", "Discovery Inc. Class C", "Media & Entertainment"),
    Security::new("DISH", "DISH Network Corp.", "Telecom"),
    Security::new("DLTR", "Dollar Tree Inc.", "Retail"),
    Security::new("DOCU", "DocuSign Inc.", "Technology"),
    Security::new("DOGE-USD", "Dogecoin", "Cryptocurrency"),
    Security::new("DXCM", "DexCom Inc.", "Healthcare"),
    Security::new("EA", "Electronic Arts Inc.", "Technology"),
    Security::new("EBAY", "eBay Inc.", "Retail"),
    Security::new("EXC", "Exelon Corp.", "Utilities"),
    Security::new("EXPE", "Expedia Group Inc.", "Travel & Hospitality"),
    Security::new("FAST", "Fastenal Co.", "Retail"),
    Security::new("FISV", "Fiserv Inc.", "Business Services"),
    Security::new("FOX", "Fox Corporation Class B", "Media & Entertainment"),
    Security::new("FOXA", "Fox Corporation Class A", "Media & Entertainment"),
    Security::new("GILD", "Gilead Sciences Inc.", "Healthcare"),
    Security::new("GOOG", "Alphabet Inc. Class C", "Technology"),
    Security::new("GOOGL", "Alphabet Inc. Class A", "Technology"),
    Security::new("GRMN", "Garmin Ltd.", "Technology"),
    Security::new("HD", "Home Depot Inc.", "Retail"),
    Security::new("HON", "Honeywell International Inc.", "Manufacturing"),
    Security::new("IDXX", "IDEXX Laboratories Inc.", "Healthcare"),
    Security::new("ILMN", "Illumina Inc.", "Healthcare"),
    Security::new("INCY", "Incyte Corp.", "Healthcare"),
    Security::new("INTC", "Intel Corp.", "Technology"),
    Security::new("INTU", "Intuit Inc.", "Technology"),
    Security::new("ISRG", "Intuitive Surgical Inc.", "Healthcare"),
    Security::new("JD", "JD.com Inc.", "Retail"),
    Security::new("JPM", "JPMorgan Chase & Co.", "Financial Services"),
    Security::new("KDP", "Keurig Dr Pepper Inc.", "Food & Beverage"),
    Security::new("KHC", "Kraft Heinz Co.", "Food & Beverage"),
    Security::new("KLAC", "KLA Corp.", "Technology"),
    Security::new("LBTYA", "Liberty Global plc Class A", "Telecom"),
    Security::new("LBTYK", "Liberty Global plc Class C", "Telecom"),
    Security::new("LRCX", "Lam Research Corp.", "Technology"),
    Security::new("LULU", "Lululemon Athletica Inc.", "Retail"),
    Security::new("MAR", "Marriott International Inc", "Travel & Hospitality"),
    Security::new("MCHP", "Microchip Technology Inc", "Technology"),
    Security::new("MDLZ", "Mondelez International Inc", "Food & Beverage"),
    Security::new("MELI", "MercadoLibre Inc", "Retail"),
    Security::new("META", "Meta Platforms Inc.", "Technology"),
    Security::new("MNST", "Monster Beverage Corp", "Food & Beverage"),
    Security::new("MSFT", "Microsoft Corp", "Technology"),
    Security::new("MU", "Micron Technology Inc", "Technology"),
    Security::new("MXIM", "Maxim Integrated Products Inc", "Technology"),
    Security::new("NFLX", "Netflix Inc", "Media & Entertainment"),
    Security::new("NTES", "NetEase Inc", "Technology"),
    Security::new("NVDA", "NVIDIA Corp", "Technology"),
    Security::new("NXPI", "NXP Semiconductors NV", "Technology"),
    Security::new("ORLY", "O'Reilly Automotive Inc", "Consumer Discretionary"),
    Security::new("PAYX", "Paychex Inc", "Technology"),
    Security::new("PCAR", "PACCAR Inc", "Industrials"),
    Security::new("PDD", "Pinduoduo Inc", "Consumer Discretionary"),
    Security::new("PEP", "PepsiCo Inc", "Consumer Staples"),
    Security::new("PFE", "Pfizer Inc", "Healthcare"),
    Security::new("PKG", "Packaging Corp of America", "Materials"),
    Security::new("PYPL", "PayPal Holdings Inc", "Technology"),
    Security::new("QCOM", "QUALCOMM Inc", "Technology"),
    Security::new("REGN", "Regeneron Pharmaceuticals Inc", "Healthcare"),
    Security::new("ROST", "Ross Stores Inc", "Consumer Discretionary"),
    Security::new("SBUX", "Starbucks Corp", "Consumer Discretionary"),
    Security::new("SGEN", "Seagen Inc", "Healthcare"),
    Security::new("SIRI", "Sirius XM Holdings Inc", "Communication Services"),
    Security::new("SNPS", "Synopsys Inc", "Technology"),
    Security::new("SPLK", "Splunk Inc", "Technology"),
    Security::new("SWKS", "Skyworks Solutions Inc", "Technology"),
    Security::new("TCOM", "Trip.com Group Ltd", "Consumer Discretionary"),
    Security::new("TEAM", "Atlassian Corporation Plc", "Technology"),
    Security::new("TSLA", "Tesla Inc", "Consumer Discretionary"),
    Security::new("TXN", "Texas Instruments Inc", "Technology"),
    Security::new("VRSK", "Verisk Analytics Inc", "Industrials"),
    Security::new("VRTX", "Vertex Pharmaceuticals Inc", "Healthcare"),
    Security::new("WBA", "Walgreens Boots Alliance Inc", "Healthcare"),
    Security::new("WDAY", "Workday Inc", "Technology"),
    Security::new("XEL", "Xcel Energy Inc", "Utilities"),
    Security::new("XLNX", "Xilinx Inc", "Technology"),
    Security::new("ZM", "Zoom Video Communications Inc", "Technology"),
];
