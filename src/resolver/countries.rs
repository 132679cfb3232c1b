//! Built-in country synonym table.

/// Three-letter code followed by the names, synonyms and demonyms that map to it.
/// The first synonym is used as the display name.
pub static COUNTRY_SYNONYMS: &[(&str, &[&str])] = &[
    ("ABW", &["Aruba"]),
    ("AFG", &["Afghanistan", "Afghan"]),
    ("AGO", &["Angola", "Angolan"]),
    ("ALB", &["Albania", "Albanian"]),
    ("AND", &["Andorra"]),
    ("ARE", &["United Arab Emirates", "Emirati"]),
    ("ARG", &["Argentina", "Argentine"]),
    ("ARM", &["Armenia", "Armenian"]),
    ("ASM", &["American Samoa"]),
    ("ATG", &["Antigua and Barbuda", "Antigua Barbuda"]),
    ("AUS", &["Australia", "Australian"]),
    ("AUT", &["Austria", "Austrian"]),
    ("AZE", &["Azerbaijan", "Azerbaijani"]),
    ("BDI", &["Burundi", "Burundian"]),
    ("BEL", &["Belgium", "Belgian"]),
    ("BEN", &["Benin", "Beninese"]),
    ("BFA", &["Burkina Faso", "Burkinabè"]),
    ("BGD", &["Bangladesh", "Bangladeshi"]),
    ("BGR", &["Bulgaria", "Bulgarian"]),
    ("BHR", &["Bahrain", "Bahrani"]),
    ("BHS", &["Bahamas", "Bahamian"]),
    ("BIH", &["Bosnia and Herzegovina", "Bosnia", "Herzigovina", "Bosnian"]),
    ("BLR", &["Belarus", "Belorussian"]),
    ("BLZ", &["Belize", "Belizean"]),
    ("BMU", &["Bermuda", "Bermudas"]),
    ("BOL", &["Bolivia", "Bolivian"]),
    ("BRA", &["Brazil", "Brazilian"]),
    ("BRB", &["Barbados", "Barbadian"]),
    ("BRN", &["Brunei Darussalam", "Brunai", "Bruneian"]),
    ("BTN", &["Bhutan", "Bhutanese"]),
    ("BWA", &["Botswana", "Batswana", "Tswana"]),
    ("CAF", &["Central African Republic"]),
    ("CAN", &["Canada", "Canadian"]),
    ("CHE", &["Switzerland", "Swiss"]),
    ("CHI", &["Channel Islands"]),
    ("CHL", &["Chile", "Chilean"]),
    ("CHN", &["China", "Chinese"]),
    ("CIV", &["Côte d'Ivoire", "Cote d'Ivoire", "Ivory Coast", "Ivorian"]),
    ("CMR", &["Cameroon", "Cameroonian"]),
    ("COG", &["Congo", "Congolese"]),
    ("COL", &["Colombia", "Colombian"]),
    ("COM", &["Comoros"]),
    ("CPV", &["Cabo Verde", "Cape Verde", "Cape Verdeans"]),
    ("CRI", &["Costa Rica", "Costa Ricans"]),
    ("CUB", &["Cuba", "Cuban"]),
    ("CUW", &["Curaçao", "Curacao"]),
    ("CYM", &["Cayman Islands"]),
    ("CYP", &["Cyprus"]),
    ("CZE", &["Czech Republic", "Czech"]),
    ("DEU", &["Germany", "German"]),
    ("DJI", &["Djibouti"]),
    ("DMA", &["Dominica"]),
    ("DNK", &["Denmark", "Dane", "Danish"]),
    ("DOM", &["Dominican Republic", "Dominican"]),
    ("DZA", &["Algeria", "Algerian"]),
    ("ECU", &["Ecuador", "Ecuadorean"]),
    ("EGY", &["Egypt", "Egyptian"]),
    ("ERI", &["Eritrea", "Eritrean"]),
    ("ESP", &["Spain", "Spanish"]),
    ("EST", &["Estonia", "Estonian"]),
    ("ETH", &["Ethiopia", "Ethiopian"]),
    ("FIN", &["Finland", "Finn"]),
    ("FJI", &["Fiji", "Fijians"]),
    ("FRA", &["France", "French"]),
    ("FRO", &["Faeroe Islands"]),
    ("FSM", &["Micronesia", "Micronesian"]),
    ("GAB", &["Gabon", "Gabonese"]),
    ("GBR", &["United Kingdom", "England", "Britain", "British"]),
    ("GEO", &["Georgia", "Georgian"]),
    ("GHA", &["Ghana", "Ghanaian"]),
    ("GIN", &["Guinea", "Guinean"]),
    ("GMB", &["Gambia", "Gambian"]),
    ("GNB", &["Guinea-Bissau"]),
    ("GNQ", &["Equatorial Guinea"]),
    ("GRC", &["Greece", "Greek"]),
    ("GRD", &["Grenada", "Grenadian"]),
    ("GRL", &["Greenland", "Greenlandic"]),
    ("GTM", &["Guatemala", "Guatemalan"]),
    ("GUM", &["Guam"]),
    ("GUY", &["Guyana", "Guyanese"]),
    ("HKG", &["Hong Kong"]),
    ("HND", &["Honduras", "Honduran"]),
    ("HRV", &["Croatia", "Croatian"]),
    ("HTI", &["Haiti", "Haitian"]),
    ("HUN", &["Hungary", "Hungarian"]),
    ("IDN", &["Indonesia", "Indonesian"]),
    ("IMN", &["Isle of Man"]),
    ("IND", &["India", "Indian"]),
    ("IRL", &["Ireland", "Irish", "Irishman"]),
    ("IRN", &["Iran", "Iranian"]),
    ("IRQ", &["Iraq", "Iraqi"]),
    ("ISL", &["Iceland", "Icelanders"]),
    ("ISR", &["Israel", "Israeli"]),
    ("ITA", &["Italy", "Italian"]),
    ("JAM", &["Jamaica", "Jamaican"]),
    ("JOR", &["Jordan", "Jordanian"]),
    ("JPN", &["Japan", "Japanese"]),
    ("KAZ", &["Kazakhstan", "Kazakh"]),
    ("KEN", &["Kenya", "Kenyan"]),
    ("KGZ", &["Kyrgyz Republic"]),
    ("KHM", &["Cambodia", "Cambodian"]),
    ("KIR", &["Kiribati"]),
    ("KNA", &["St. Kitts and Nevis", "Kitts Nevis"]),
    ("KOR", &["Korea Rep.", "Korea Republic", "South Korea", "South Korean"]),
    ("KWT", &["Kuwait", "Kuwaiti"]),
    ("LAO", &["Lao PDR", "Laos", "Laotian"]),
    ("LBN", &["Lebanon", "Lebanese"]),
    ("LBR", &["Liberia", "Liberian"]),
    ("LBY", &["Libya", "Libyan"]),
    ("LCA", &["St. Lucia", "Lucia"]),
    ("LIE", &["Liechtenstein", "Liechtensteiner"]),
    ("LKA", &["Sri Lanka", "Sri Lankan", "Lanka", "Lankan"]),
    ("LSO", &["Lesotho", "Sotho"]),
    ("LTU", &["Lithuania", "Lithuanian"]),
    ("LUX", &["Luxembourg", "Luxembourger"]),
    ("LVA", &["Latvia", "Latvian"]),
    ("MAC", &["Macao SAR", "Macao"]),
    ("MAF", &["St. Martin (French part)"]),
    ("MAR", &["Morocco", "Moroccan"]),
    ("MCO", &["Monaco"]),
    ("MDA", &["Moldova", "Moldovan"]),
    ("MDG", &["Madagascar", "Madagascan"]),
    ("MDV", &["Maldives", "Maldivian"]),
    ("MEX", &["Mexico", "Mexican"]),
    ("MHL", &["Marshall Islands"]),
    ("MKD", &["Macedonia", "Macedonian"]),
    ("MLI", &["Mali", "Malian"]),
    ("MLT", &["Malta", "Maltese"]),
    ("MMR", &["Myanmar"]),
    ("MNE", &["Montenegro", "Montenegrin"]),
    ("MNG", &["Mongolia", "Mongolian"]),
    ("MNP", &["Northern Mariana Islands", "Mariana Islands"]),
    ("MOZ", &["Mozambique", "Mozambican"]),
    ("MRT", &["Mauritania", "Mauritanian"]),
    ("MUS", &["Mauritius", "Mauritian"]),
    ("MWI", &["Malawi", "Malawian"]),
    ("MYS", &["Malaysia", "Malaysian"]),
    ("NAM", &["Namibia", "Namibian"]),
    ("NCL", &["New Caledonia", "New Caledonian"]),
    ("NER", &["Niger", "Nigerien"]),
    ("NGA", &["Nigeria", "Nigerian"]),
    ("NIC", &["Nicaragua", "Nicaraguan"]),
    ("NLD", &["Netherlands", "Holland", "Dutch"]),
    ("NOR", &["Norway", "Norwegian"]),
    ("NPL", &["Nepal", "Nepalese"]),
    ("NZL", &["New Zealand", "New Zealanders", "Zealand", "Zealanders"]),
    ("OMN", &["Oman", "Omani"]),
    ("PAK", &["Pakistan", "Pakistani"]),
    ("PAN", &["Panama", "Panamanian"]),
    ("PER", &["Peru", "Peruvian"]),
    ("PHL", &["Philippines", "Filipino"]),
    ("PLW", &["Palau", "Palauans"]),
    ("PNG", &["Papua New Guinea", "Papuan"]),
    ("POL", &["Poland", "Polish"]),
    ("PRI", &["Puerto Rico", "Puerto Ricans"]),
    ("PRK", &["North Korea", "North Koreans"]),
    ("PRT", &["Portugal", "Portuguese"]),
    ("PRY", &["Paraguay", "Paraguayan"]),
    ("PSE", &["West Bank and Gaza"]),
    ("PYF", &["French Polynesia"]),
    ("QAT", &["Qatar", "Qatari"]),
    ("ROU", &["Romania", "Romanian"]),
    ("RUS", &["Russian Federation", "Russia", "Russian"]),
    ("RWA", &["Rwanda"]),
    ("SAU", &["Saudi Arabia", "Saudi"]),
    ("SDN", &["Sudan", "Sudanese"]),
    ("SEN", &["Senegal", "Senegalese"]),
    ("SGP", &["Singapore", "Singaporean"]),
    ("SLB", &["Solomon Islands"]),
    ("SLE", &["Sierra Leone"]),
    ("SLV", &["El Salvador", "Salvador", "Salvadorean"]),
    ("SMR", &["San Marino"]),
    ("SOM", &["Somalia", "Somali"]),
    ("SRB", &["Serbia", "Serbian"]),
    ("SSD", &["South Sudan", "South Sudanese"]),
    ("STP", &["São Tomé and Principe", "Sao Tome and Principe", "Tomé Principe", "Tome Principe"]),
    ("SUR", &["Suriname", "Surinamese"]),
    ("SVK", &["Slovak Republic", "Slovakia", "Slovak"]),
    ("SVN", &["Slovenia", "Slovenian"]),
    ("SWE", &["Sweden", "Swede"]),
    ("SWZ", &["Swaziland", "Swazi"]),
    ("SXM", &["Sint Maarten (Dutch part)"]),
    ("SYC", &["Seychelles"]),
    ("SYR", &["Syrian Arab Republic", "Syria", "Syrian"]),
    ("TCA", &["Turks and Caicos Islands", "Turks Caicos Islands"]),
    ("TCD", &["Chad", "Chadian"]),
    ("TGO", &["Togo", "Togolese"]),
    ("THA", &["Thailand", "Thai"]),
    ("TJK", &["Tajikistan", "Tadzhik"]),
    ("TKM", &["Turkmenistan"]),
    ("TLS", &["Timor-Leste"]),
    ("TON", &["Tonga", "Tongolese"]),
    ("TTO", &["Trinidad and Tobago", "Trinidadian and Tobagonian", "Trinidad Tobago", "Trinidadian Tobagonian"]),
    ("TUN", &["Tunisia", "Tunisian"]),
    ("TUR", &["Turkey", "Turkish"]),
    ("TUV", &["Tuvalu"]),
    ("TWN", &["Taiwan", "Taiwanese"]),
    ("TZA", &["Tanzania", "Tanzanian"]),
    ("UGA", &["Uganda", "Ugandan"]),
    ("UKR", &["Ukraine", "Ukrainian"]),
    ("URY", &["Uruguay", "Uruguayan"]),
    ("USA", &["United States", "American", "US"]),
    ("UZB", &["Uzbekistan", "Uzbek"]),
    ("VCT", &["St. Vincent and the Grenadines", "Vincent Grenadines"]),
    ("VEN", &["Venezuela", "Venezuelan"]),
    ("VIR", &["Virgin Islands (U.S.)", "Virgin Islands"]),
    ("VNM", &["Vietnam", "Vietnamese"]),
    ("VUT", &["Vanuatu"]),
    ("WSM", &["Samoa"]),
    ("YEM", &["Yemen"]),
    ("ZAF", &["South Africa"]),
    ("ZMB", &["Zambia", "Zambian"]),
    ("ZWE", &["Zimbabwe", "Zimbabwean"]),
];
