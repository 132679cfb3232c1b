//! World Bank indicator codes, their published names and analysis category.

use super::Category;

/// Listed in column order: grouped by category, then as published.
pub static WORLD_BANK_INDICATORS: &[(&str, &str, Category)] = &[
    ("IC.FRM.CORR.ZS", "Informal payments to public officials (% of firms)", Category::Development),
    ("IE.PPI.ENGY.CD", "Investment in energy with private participation (current US$)", Category::Development),
    ("IE.PPI.TELE.CD", "Investment in telecoms with private participation (current US$)", Category::Development),
    ("IE.PPI.TRAN.CD", "Investment in transport with private participation (current US$)", Category::Development),
    ("IE.PPI.WATR.CD", "Investment in water and sanitation with private participation (current US$)", Category::Development),
    ("SP.DYN.LE00.FE.IN", "Life expectancy at birth, female (years)", Category::Development),
    ("SP.DYN.LE00.MA.IN", "Life expectancy at birth, male (years)", Category::Development),
    ("SE.ADT.LITR.ZS", "Literacy rate, adult total (% of people ages 15 and above)", Category::Development),
    ("SE.ADT.1524.LT.FE.ZS", "Literacy rate, youth female (% of females ages 15-24)", Category::Development),
    ("SE.ADT.1524.LT.MA.ZS", "Literacy rate, youth male (% of males ages 15-24)", Category::Development),
    ("SE.ADT.1524.LT.ZS", "Literacy rate, youth total (% of people ages 15-24)", Category::Development),
    ("IT.CEL.SETS.P2", "Mobile cellular subscriptions (per 100 people)", Category::Development),
    ("SI.POV.GAP2", "Poverty gap at $2 a day (PPP) (%)", Category::Development),
    ("SI.POV.NAGP", "Poverty gap at national poverty lines (%)", Category::Development),
    ("SI.POV.DDAY", "Poverty headcount ratio at $1.25 a day (PPP) (% of population)", Category::Development),
    ("SG.GEN.PARL.ZS", "Proportion of seats held by women in national parliaments (%)", Category::Development),
    ("EN.FSH.THRD.NO", "Fish species, threatened", Category::Ecology),
    ("AG.LND.FRST.ZS", "Forest area (% of land area)", Category::Ecology),
    ("AG.LND.FRST.K2", "Forest area (sq. km)", Category::Ecology),
    ("EN.MAM.THRD.NO", "Mammal species, threatened", Category::Ecology),
    ("ER.MRN.PTMR.ZS", "Marine protected areas (% of territorial waters)", Category::Ecology),
    ("EN.HPT.THRD.NO", "Plant species (higher), threatened", Category::Ecology),
    ("GC.BAL.CASH.GD.ZS", "Cash surplus/deficit (% of GDP)", Category::EconomyGeneral),
    ("FM.AST.DOMO.ZG.M3", "Claims on other sectors of the domestic economy (annual growth as % of broad money)", Category::EconomyGeneral),
    ("BN.CAB.XOKA.CD", "Current account balance (BoP, current US$)", Category::EconomyGeneral),
    ("FR.INR.DPST", "Deposit interest rate (%)", Category::EconomyGeneral),
    ("IC.CRD.INFO.XQ", "Depth of credit information index (0=low to 8=high)", Category::EconomyGeneral),
    ("FS.AST.PRVT.GD.ZS", "Domestic credit to private sector (% of GDP)", Category::EconomyGeneral),
    ("IC.BUS.EASE.XQ", "Ease of doing business index (1=most business-friendly regulations)", Category::EconomyGeneral),
    ("NE.EXP.GNFS.ZS", "Exports of goods and services (% of GDP)", Category::EconomyGeneral),
    ("DT.DOD.DECT.CD", "External debt stocks, total (DOD, current US$)", Category::EconomyGeneral),
    ("BX.KLT.DINV.CD.WD", "Foreign direct investment, net inflows (BoP, current US$)", Category::EconomyGeneral),
    ("EG.GDP.PUSE.KO.PP.KD", "GDP per unit of energy use (constant 2011 PPP $ per kg of oil equivalent)", Category::EconomyGeneral),
    ("NY.GDP.MKTP.CD", "GDP (current US$)", Category::EconomyGeneral),
    ("NY.GNP.PCAP.CD", "GNI per capita, Atlas method (current US$)", Category::EconomyGeneral),
    ("NE.GDI.TOTL.ZS", "Gross capital formation (% of GDP)", Category::EconomyGeneral),
    ("NY.GNS.ICTR.ZS", "Gross savings (% of GDP)", Category::EconomyGeneral),
    ("TM.VAL.MRCH.XD.WD", "Import value index (2000 = 100)", Category::EconomyGeneral),
    ("NV.IND.TOTL.ZS", "Industry, value added (% of GDP)", Category::EconomyGeneral),
    ("FP.CPI.TOTL.ZG", "Inflation, consumer prices (annual %)", Category::EconomyGeneral),
    ("NY.GDP.DEFL.KD.ZG", "Inflation, GDP deflator (annual %)", Category::EconomyGeneral),
    ("IC.FRM.ISOC.ZS", "Internationally-recognized quality certification (% of firms)", Category::EconomyGeneral),
    ("FR.INR.LEND", "Lending interest rate (%)", Category::EconomyGeneral),
    ("FM.LBL.MQMY.ZG", "Money and quasi money growth (annual %)", Category::EconomyGeneral),
    ("IC.BUS.NREG", "New businesses registered (number)", Category::EconomyGeneral),
    ("FR.INR.RINR", "Real interest rate (%)", Category::EconomyGeneral),
    ("GC.REV.XGRT.GD.ZS", "Revenue, excluding grants (% of GDP)", Category::EconomyGeneral),
    ("BM.TRF.PRVT.CD", "Secondary income, other sectors, payments (BoP, current US$)", Category::EconomyGeneral),
    ("NV.SRV.TETC.ZS", "Services, etc., value added (% of GDP)", Category::EconomyGeneral),
    ("IC.LGL.CRED.XQ", "Strength of legal rights index (0=weak to 12=strong)", Category::EconomyGeneral),
    ("CM.MKT.INDX.ZG", "S&P Global Equity Indices (annual % change)", Category::EconomyGeneral),
    ("IC.TAX.PAYM", "Tax payments (number)", Category::EconomyGeneral),
    ("IC.TAX.TOTL.CP.ZS", "Total tax rate (% of commercial profits)", Category::EconomyGeneral),
    ("BG.GSR.NFSV.GD.ZS", "Trade in services (% of GDP)", Category::EconomyGeneral),
    ("GC.DOD.TOTL.GD.ZS", "Central government debt, total (% of GDP)", Category::EconomySocialImpact),
    ("FM.AST.CGOV.ZG.M3", "Claims on central government (annual growth as % of broad money", Category::EconomySocialImpact),
    ("SI.DST.04TH.20", "Income share held by fourth 20%", Category::EconomySocialImpact),
    ("SI.DST.10TH.10", "Income share held by highest 10%", Category::EconomySocialImpact),
    ("SI.DST.05TH.20", "Income share held by highest 20%", Category::EconomySocialImpact),
    ("SI.DST.FRST.10", "Income share held by lowest 10%", Category::EconomySocialImpact),
    ("SI.DST.FRST.20", "Income share held by lowest 20%", Category::EconomySocialImpact),
    ("SI.DST.02ND.20", "Income share held by second 20%", Category::EconomySocialImpact),
    ("SI.DST.03RD.20", "Income share held by third 20%", Category::EconomySocialImpact),
    ("BX.TRF.PWKR.CD.DT", "Personal remittances, received (current US$)", Category::EconomySocialImpact),
    ("IC.CRD.PRVT.ZS", "Private credit bureau coverage (% of adults)", Category::EconomySocialImpact),
    ("IC.CRD.PUBL.ZS", "Public credit registry coverage (% of adults)", Category::EconomySocialImpact),
    ("DT.TDS.DECT.EX.ZS", "Total debt service (% of exports of goods, services and primary income)", Category::EconomySocialImpact),
    ("FI.RES.TOTL.CD", "Total reserves (includes gold, current US$)", Category::EconomySocialImpact),
    ("SL.TLF.0714.FE.ZS", "Children in employment, female (% of female children ages 7-14)", Category::EconomyEmployment),
    ("SL.TLF.0714.MA.ZS", "Children in employment, male (% of male children ages 7-14)", Category::EconomyEmployment),
    ("SL.TLF.TOTL.IN", "Labor force, total]", Category::EconomyEmployment),
    ("SL.UEM.LTRM.FE.ZS", "Long-term unemployment, female (% of female unemployment", Category::EconomyEmployment),
    ("SL.UEM.LTRM.MA.ZS", "Long-term unemployment, male (% of male unemployment)", Category::EconomyEmployment),
    ("SL.UEM.TOTL.FE.ZS", "Unemployment, female (% of female labor force) (modeled ILO estimate)", Category::EconomyEmployment),
    ("SL.UEM.TOTL.MA.ZS", "Unemployment, male (% of male labor force) (modeled ILO estimate)", Category::EconomyEmployment),
    ("SL.UEM.TOTL.ZS", "Unemployment, total (% of total labor force) (modeled ILO estimate)", Category::EconomyEmployment),
    ("SL.EMP.VULN.ZS", "Vulnerable employment, total (% of total employment)", Category::EconomyEmployment),
    ("SE.PRM.UNER.FE", "Children out of school, primary, female", Category::Education),
    ("SE.PRM.UNER.MA", "Children out of school, primary, male", Category::Education),
    ("SE.PRM.GINT.FE.ZS", "Gross intake ratio in first grade of primary education, female (% of relevant age group)", Category::Education),
    ("SE.PRM.GINT.MA.ZS", "Gross intake ratio in first grade of primary education, male (% of relevant age group)", Category::Education),
    ("SE.PRM.PRSL.FE.ZS", "Persistence to last grade of primary, female (% of cohort)", Category::Education),
    ("SE.PRM.PRSL.MA.ZS", "Persistence to last grade of primary, male (% of cohort)", Category::Education),
    ("SE.PRM.CMPT.ZS", "Primary completion rate, total (% of relevant age group)", Category::Education),
    ("SE.SEC.PROG.FE.ZS", "Progression to secondary school, female (%)", Category::Education),
    ("SE.SEC.PROG.MA.ZS", "Progression to secondary school, male (%)", Category::Education),
    ("SE.PRM.ENRL.TC.ZS", "Pupil-teacher ratio, primary", Category::Education),
    ("SE.ENR.PRIM.FM.ZS", "Ratio of female to male primary enrollment (%)", Category::Education),
    ("SE.ENR.SECO.FM.ZS", "Ratio of female to male secondary enrollment (%)", Category::Education),
    ("SE.ENR.TERT.FM.ZS", "Ratio of female to male tertiary enrollment (%)", Category::Education),
    ("SE.ENR.PRSC.FM.ZS", "Ratio of girls to boys in primary and secondary education (%)", Category::Education),
    ("SE.PRE.ENRR", "School enrollment, preprimary (% gross)", Category::Education),
    ("SE.PRM.ENRR", "School enrollment, primary (% gross)", Category::Education),
    ("SE.PRM.NENR", "School enrollment, primary (% net)", Category::Education),
    ("SE.SEC.ENRR", "School enrollment, secondary (% gross)", Category::Education),
    ("SE.SEC.NENR", "School enrollment, secondary (% net)", Category::Education),
    ("SE.TER.ENRR", "School enrollment, tertiary (% gross)", Category::Education),
    ("IP.JRN.ARTC.SC", "Scientific and technical journal articles", Category::Education),
    ("SP.POP.TECH.RD.P6", "Technicians in R&D (per million people)", Category::Education),
    ("SE.PRM.TCAQ.ZS", "Trained teachers in primary education (% of total teachers)", Category::Education),
    ("EN.ATM.CO2E.PC", "CO2 emissions (metric tons per capita)", Category::Emission),
    ("EN.ATM.CO2E.KT", "CO2 emissions (kt)]", Category::Emission),
    ("EN.ATM.METH.KT.CE", "Methane emissions (kt of CO2 equivalent)", Category::Emission),
    ("EN.ATM.NOXE.KT.CE", "Nitrous oxide emissions (thousand metric tons of CO2 equivalent)", Category::Emission),
    ("EN.ATM.GHGO.KT.CE", "Other greenhouse gas emissions, HFC, PFC and SF6 (thousand metric tons of CO2 equivalent)", Category::Emission),
    ("EG.ELC.ACCS.ZS", "Access to electricity (% of population)", Category::Energy),
    ("EG.USE.COMM.CL.ZS", "Alternative and nuclear energy (% of total energy use)", Category::Energy),
    ("EG.USE.CRNW.ZS", "Combustible renewables and waste (% of total energy)", Category::Energy),
    ("EG.USE.ELEC.KH.PC", "Electric power consumption (kWh per capita)", Category::Energy),
    ("EG.IMP.CONS.ZS", "Energy imports, net (% of energy use)", Category::Energy),
    ("EG.USE.PCAP.KG.OE", "Energy use (kg of oil equivalent per capita)", Category::Energy),
    ("EG.USE.COMM.FO.ZS", "Fossil fuel energy consumption (% of total)", Category::Energy),
    ("EP.PMP.DESL.CD", "Pump price for diesel fuel (US$ per liter)", Category::Energy),
    ("EP.PMP.SGAS.CD", "Pump price for gasoline (US$ per liter)", Category::Energy),
    ("GC.XPN.TOTL.GD.ZS", "Expense (% of GDP)", Category::GovernmentExpenditure),
    ("SE.XPD.TOTL.GD.ZS", "Government expenditure on education, total (% of GDP)", Category::GovernmentExpenditure),
    ("SE.XPD.TOTL.GB.ZS", "Government expenditure on education, total (% of government expenditure)", Category::GovernmentExpenditure),
    ("SE.XPD.PRIM.PC.ZS", "Government expenditure per student, primary (% of GDP per capita)", Category::GovernmentExpenditure),
    ("SE.XPD.SECO.PC.ZS", "Government expenditure per student, secondary (% of GDP per capita)", Category::GovernmentExpenditure),
    ("SE.XPD.TERT.PC.ZS", "Government expenditure per student, tertiary (% of GDP per capita)", Category::GovernmentExpenditure),
    ("MS.MIL.XPND.ZS", "Military expenditure (% of central government expenditure)", Category::GovernmentExpenditure),
    ("MS.MIL.XPND.GD.ZS", "Military expenditure (% of GDP)", Category::GovernmentExpenditure),
    ("SH.XPD.PCAP", "Health expenditure per capita (current US$)", Category::Health),
    ("SH.XPD.PUBL", "Health expenditure, public (% of total health expenditure", Category::Health),
    ("SH.XPD.TOTL.ZS", "Health expenditure, total (% of GDP)", Category::Health),
    ("SH.STA.ACSN", "Improved sanitation facilities (% of population with access)", Category::Health),
    ("SH.H2O.SAFE.RU.ZS", "Improved water source, rural (% of rural population with access)", Category::Health),
    ("SH.H2O.SAFE.UR.ZS", "Improved water source, urban (% of urban population with access)", Category::Health),
    ("SH.XPD.OOPC.ZS", "Out-of-pocket health expenditure (% of private expenditure on health)", Category::Health),
    ("DT.ODA.ODAT.GN.ZS", "Net ODA received (% of GNI)", Category::InternationalRelations),
    ("DT.ODA.ODAT.PC.ZS", "Net ODA received per capita (current US$)", Category::InternationalRelations),
    ("DT.ODA.ALLD.CD", "Net official development assistance and official aid received (current US$)", Category::InternationalRelations),
    ("DT.ODA.ODAT.CD", "Net official development assistance received (current US$)", Category::InternationalRelations),
    ("AG.LND.AGRI.ZS", "Agricultural land (% of land area)", Category::LandUse),
    ("NV.AGR.TOTL.ZS", "Agriculture, value added (% of GDP)", Category::LandUse),
    ("ER.H2O.FWTL.K3", "Annual freshwater withdrawals, total (billion cubic meters)", Category::LandUse),
    ("AG.LND.ARBL.ZS", "Arable land (% of land area)", Category::LandUse),
    ("SL.AGR.EMPL.ZS", "Employment in agriculture (% of total employment)", Category::LandUse),
    ("AG.CON.FERT.ZS", "Fertilizer consumption (kilograms per hectare of arable land)", Category::LandUse),
    ("AG.LND.TOTL.K2", "Land area (sq. km)", Category::LandUse),
    ("AG.LND.CROP.ZS", "Permanent cropland (% of land area)", Category::LandUse),
    ("SM.POP.NETM", "Net migration", Category::Population),
    ("SP.RUR.TOTL.ZS", "Percentage of Population in Rural Areas (in % of Total Population)", Category::Population),
    ("SP.POP.0014.TO.ZS", "Population ages 0-14 (% of total)", Category::Population),
    ("SP.POP.1564.TO.ZS", "Population ages 15-64 (% of total)", Category::Population),
    ("SP.POP.TOTL.FE.ZS", "Population, female (% of total)", Category::Population),
    ("SP.POP.GROW", "Population growth (annual %)", Category::Population),
    ("EN.URB.MCTY.TL.ZS", "Population in urban agglomerations of more than 1 million (% of total population)", Category::Population),
    ("SM.POP.REFG", "Refugee population by country or territory of asylum", Category::Population),
    ("SM.POP.REFG.OR", "Refugee population by country or territory of origin", Category::Population),
    ("SP.RUR.TOTL", "Rural population", Category::Population),
    ("SI.POV.RUGP", "Rural poverty gap at national poverty lines (%)", Category::Population),
    ("SP.POP.TOTL", "Total Population (in number of people)", Category::Population),
    ("SP.URB.TOTL", "Urban population", Category::Population),
    ("SP.URB.TOTL.IN.ZS", "Urban population (% of total)", Category::Population),
    ("SI.POV.URGP", "Urban poverty gap at national poverty lines (%)", Category::Population),
];
