//! Geography Catalog Data
//!
//! Canonical bilingual country and continent names with curated alias sets.
//! Rows are declared in continent order; when two rows normalize to the same
//! alias key the later row wins in the alias index.

use super::Continent;
use super::Continent::*;

/// One country or territory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    /// ISO-like short code, unique within the catalog
    pub code: &'static str,
    pub name_cn: &'static str,
    pub name_en: &'static str,
    pub continent: Continent,
    /// Historical names, abbreviations and alternate spellings
    pub aliases: &'static [&'static str],
}

impl CountryEntry {
    pub const fn new(
        code: &'static str,
        name_cn: &'static str,
        name_en: &'static str,
        continent: Continent,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            name_cn,
            name_en,
            continent,
            aliases,
        }
    }
}

/// One continent row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinentEntry {
    pub continent: Continent,
    pub name_cn: &'static str,
    pub name_en: &'static str,
    pub aliases: &'static [&'static str],
}

pub static CONTINENTS: &[ContinentEntry] = &[
    ContinentEntry { continent: Asia, name_cn: "亚洲", name_en: "Asia", aliases: &["Asian"] },
    ContinentEntry { continent: Europe, name_cn: "欧洲", name_en: "Europe", aliases: &["European"] },
    ContinentEntry { continent: Africa, name_cn: "非洲", name_en: "Africa", aliases: &["African"] },
    ContinentEntry {
        continent: NorthAmerica,
        name_cn: "北美洲",
        name_en: "North America",
        aliases: &["North American", "Northern America", "N America"],
    },
    ContinentEntry {
        continent: SouthAmerica,
        name_cn: "南美洲",
        name_en: "South America",
        aliases: &["South American", "Southern America", "S America", "Latin America"],
    },
    ContinentEntry {
        continent: Oceania,
        name_cn: "大洋洲",
        name_en: "Oceania",
        aliases: &["Oceanic", "Australia and Oceania", "Pacific"],
    },
    ContinentEntry { continent: Antarctica, name_cn: "南极洲", name_en: "Antarctica", aliases: &["Antarctic"] },
];

/// Codes still emitted by some upstream feeds, mapped to their catalog code.
pub const LEGACY_CODES: &[(&str, &str)] = &[("UK", "GB")];

#[rustfmt::skip]
pub static COUNTRIES: &[CountryEntry] = &[
    // Asia
    CountryEntry::new("CN", "中国", "China", Asia, &["china", "chinese"]),
    CountryEntry::new("HK", "中国香港特区", "Hong Kong", Asia, &["HongKong", "Hong Kong SAR, China", "Hong Kong SAR"]),
    CountryEntry::new("MO", "中国澳门特区", "Macau", Asia, &["Macao", "Macau SAR, China", "Macau SAR"]),
    CountryEntry::new("TW", "中国台湾省", "Taiwan", Asia, &["Taiwan Province", "Taiwan, China", "Taiwan (R.O.C.)", "R.O.C."]),
    CountryEntry::new("JP", "日本", "Japan", Asia, &[]),
    CountryEntry::new("KR", "韩国", "South Korea", Asia, &["Korea", "Republic of Korea"]),
    CountryEntry::new("KP", "朝鲜", "North Korea", Asia, &["Democratic People's Republic of Korea", "DPRK"]),
    CountryEntry::new("SG", "新加坡", "Singapore", Asia, &[]),
    CountryEntry::new("MY", "马来西亚", "Malaysia", Asia, &[]),
    CountryEntry::new("TH", "泰国", "Thailand", Asia, &[]),
    CountryEntry::new("VN", "越南", "Vietnam", Asia, &["Viet Nam"]),
    CountryEntry::new("PH", "菲律宾", "Philippines", Asia, &[]),
    CountryEntry::new("ID", "印度尼西亚", "Indonesia", Asia, &[]),
    CountryEntry::new("BN", "文莱布鲁萨兰", "Brunei Darussalam", Asia, &["Brunei"]),
    CountryEntry::new("KH", "柬埔寨", "Cambodia", Asia, &[]),
    CountryEntry::new("LA", "老挝", "Laos", Asia, &["Lao People's Democratic Republic"]),
    CountryEntry::new("MM", "缅甸", "Republic of the Union of Myanmar", Asia, &["Myanmar", "Burma"]),
    CountryEntry::new("TL", "东帝汶", "East Timor", Asia, &["Timor-Leste"]),
    CountryEntry::new("IN", "印度", "India", Asia, &[]),
    CountryEntry::new("PK", "巴基斯坦", "Pakistan", Asia, &[]),
    CountryEntry::new("BD", "孟加拉", "Bangladesh", Asia, &[]),
    CountryEntry::new("LK", "斯里兰卡", "Sri Lanka", Asia, &[]),
    CountryEntry::new("NP", "尼泊尔", "Nepal", Asia, &[]),
    CountryEntry::new("BT", "不丹", "Bhutan", Asia, &[]),
    CountryEntry::new("MV", "马尔代夫", "Maldives", Asia, &[]),
    CountryEntry::new("AF", "阿富汗", "Afghanistan", Asia, &[]),
    CountryEntry::new("IR", "伊朗", "Islamic Republic of Iran", Asia, &["Iran"]),
    CountryEntry::new("IQ", "伊拉克", "Iraq", Asia, &[]),
    CountryEntry::new("SY", "叙利亚", "The Syrian Arab Republic", Asia, &["Syria"]),
    CountryEntry::new("JO", "约旦", "Jordan", Asia, &[]),
    CountryEntry::new("LB", "黎巴嫩", "Lebanon", Asia, &[]),
    CountryEntry::new("PS", "巴勒斯坦", "Palestine", Asia, &["State of Palestine"]),
    CountryEntry::new("IL", "以色列", "Israel", Asia, &[]),
    CountryEntry::new("SA", "沙特阿拉伯", "Saudi Arabia", Asia, &["KSA"]),
    CountryEntry::new("AE", "阿联酋", "United Arab Emirates", Asia, &["UAE"]),
    CountryEntry::new("KW", "科威特", "Kuwait", Asia, &[]),
    CountryEntry::new("BH", "巴林", "Bahrain", Asia, &[]),
    CountryEntry::new("QA", "卡塔尔", "Qatar", Asia, &[]),
    CountryEntry::new("OM", "阿曼", "Oman", Asia, &[]),
    CountryEntry::new("YE", "也门", "Yemen", Asia, &[]),
    CountryEntry::new("TR", "土耳其", "Turkey", Asia, &["Türkiye", "Turkiye"]),
    CountryEntry::new("GE", "格鲁吉亚", "Georgia", Asia, &[]),
    CountryEntry::new("AM", "亚美尼亚", "Armenia", Asia, &[]),
    CountryEntry::new("AZ", "阿塞拜疆", "Azerbaijan Republic", Asia, &[]),
    CountryEntry::new("KZ", "哈萨克斯坦", "Kazakhstan", Asia, &[]),
    CountryEntry::new("UZ", "乌兹别克斯坦", "Uzbekistan", Asia, &[]),
    CountryEntry::new("TM", "土库曼斯坦", "Turkmenistan", Asia, &[]),
    CountryEntry::new("KG", "吉尔吉斯斯坦", "Kyrgyzstan", Asia, &[]),
    CountryEntry::new("TJ", "塔吉克斯坦", "Tajikistan", Asia, &[]),
    CountryEntry::new("MN", "蒙古", "Mongolia", Asia, &[]),
    CountryEntry::new("XK", "加罗林群岛", "Caroline Islands", Asia, &[]),
    // Europe
    CountryEntry::new("GB", "英国", "United Kingdom", Europe, &["UK", "Britain", "Great Britain", "England", "Scotland", "Wales", "Northern Ireland"]),
    CountryEntry::new("FR", "法国", "France", Europe, &[]),
    CountryEntry::new("DE", "德国", "Germany", Europe, &[]),
    CountryEntry::new("IT", "意大利", "Italy", Europe, &[]),
    CountryEntry::new("ES", "西班牙", "Spain", Europe, &[]),
    CountryEntry::new("PT", "葡萄牙", "Portugal", Europe, &[]),
    CountryEntry::new("NL", "荷兰", "Netherlands", Europe, &["Holland", "The Netherlands"]),
    CountryEntry::new("BE", "比利时", "Belgium", Europe, &[]),
    CountryEntry::new("LU", "卢森堡", "Luxembourg", Europe, &[]),
    CountryEntry::new("CH", "瑞士", "Switzerland", Europe, &[]),
    CountryEntry::new("AT", "奥地利", "Austria", Europe, &[]),
    CountryEntry::new("GR", "希腊", "Greece", Europe, &[]),
    CountryEntry::new("NO", "挪威", "Norway", Europe, &[]),
    CountryEntry::new("SE", "瑞典", "Sweden", Europe, &[]),
    CountryEntry::new("FI", "芬兰", "Finland", Europe, &[]),
    CountryEntry::new("DK", "丹麦", "Denmark", Europe, &[]),
    CountryEntry::new("IS", "冰岛", "Iceland", Europe, &[]),
    CountryEntry::new("IE", "爱尔兰", "Ireland", Europe, &[]),
    CountryEntry::new("PL", "波兰", "Poland", Europe, &[]),
    CountryEntry::new("CZ", "捷克", "Czech Republic", Europe, &["Czechia"]),
    CountryEntry::new("SK", "斯洛伐克", "Slovakia", Europe, &[]),
    CountryEntry::new("HU", "匈牙利", "Hungary", Europe, &[]),
    CountryEntry::new("RO", "罗马尼亚", "Romania", Europe, &[]),
    CountryEntry::new("BG", "保加利亚", "Bulgaria", Europe, &[]),
    CountryEntry::new("SI", "斯洛文尼亚", "Slovenia", Europe, &[]),
    CountryEntry::new("HR", "克罗地亚", "Croatia", Europe, &[]),
    CountryEntry::new("BA", "波黑", "Bosnia and Herzegovina", Europe, &["Bosnia"]),
    CountryEntry::new("RS", "塞尔维亚", "Serbia", Europe, &[]),
    CountryEntry::new("ME", "黑山共和国", "Montenegro", Europe, &[]),
    CountryEntry::new("YK", "科索沃", "Kosovo", Europe, &[]),
    CountryEntry::new("MK", "马其顿", "Macedonia", Europe, &["North Macedonia"]),
    CountryEntry::new("AL", "阿尔巴尼亚", "Albania", Europe, &[]),
    CountryEntry::new("LT", "立陶宛", "Lithuania", Europe, &[]),
    CountryEntry::new("LV", "拉脱维亚", "Latvia", Europe, &[]),
    CountryEntry::new("EE", "爱沙尼亚", "Estonia", Europe, &[]),
    CountryEntry::new("BY", "白俄罗斯", "Belarus", Europe, &[]),
    CountryEntry::new("UA", "乌克兰", "Ukraine", Europe, &[]),
    CountryEntry::new("MD", "摩尔多瓦", "Moldova", Europe, &["Republic of Moldova"]),
    CountryEntry::new("RU", "俄罗斯", "Russian Federation", Europe, &["Russia"]),
    CountryEntry::new("MT", "马耳他", "Malta", Europe, &[]),
    CountryEntry::new("MC", "摩纳哥", "Monaco", Europe, &[]),
    CountryEntry::new("SM", "圣马力诺", "San Marino", Europe, &[]),
    CountryEntry::new("VA", "梵蒂冈", "Vatican City State", Europe, &["Vatican", "Holy See"]),
    CountryEntry::new("LI", "列支顿士登", "Liechtenstein", Europe, &[]),
    CountryEntry::new("AD", "安道尔", "Andorra", Europe, &[]),
    CountryEntry::new("FO", "法罗群岛", "Faroe Islands", Europe, &[]),
    CountryEntry::new("GI", "直布罗陀", "Gibraltar", Europe, &[]),
    CountryEntry::new("GG", "根西岛", "Guernsey", Europe, &[]),
    CountryEntry::new("JE", "泽西岛", "Jersey", Europe, &[]),
    CountryEntry::new("IM", "马恩岛", "Isle of Man", Europe, &["Islan of Man"]),
    CountryEntry::new("AX", "奥兰群岛", "Aland Islands", Europe, &["Åland Islands"]),
    CountryEntry::new("SJ", "斯瓦尔巴群岛和扬马延岛", "Svalbard and Jan Mayen", Europe, &[]),
    CountryEntry::new("TF", "法属南部领地", "French Southern Territories", Europe, &[]),
    CountryEntry::new("XJ", "巴利阿里群岛", "Balearic Islands", Europe, &[]),
    CountryEntry::new("XH", "亚速尔群岛", "Azores", Europe, &[]),
    CountryEntry::new("XF", "科西嘉岛", "Corsica", Europe, &[]),
    CountryEntry::new("SX", "荷属圣马丁", "SintMaarten", Europe, &[]),
    CountryEntry::new("CY", "塞普路斯", "Cyprus", Europe, &[]),
    // North America
    CountryEntry::new("US", "美国", "United States", NorthAmerica, &["USA", "United States of America", "America", "U.S.A."]),
    CountryEntry::new("CA", "加拿大", "Canada", NorthAmerica, &[]),
    CountryEntry::new("MX", "墨西哥", "Mexico", NorthAmerica, &[]),
    CountryEntry::new("CU", "古巴", "The Republic of Cuba", NorthAmerica, &[]),
    CountryEntry::new("PA", "巴拿马", "Panama", NorthAmerica, &[]),
    CountryEntry::new("CR", "哥斯达黎加", "Costa Rica", NorthAmerica, &[]),
    CountryEntry::new("NI", "尼加拉瓜", "Nicaragua", NorthAmerica, &[]),
    CountryEntry::new("HN", "洪都拉斯", "Honduras", NorthAmerica, &[]),
    CountryEntry::new("SV", "萨尔瓦多", "El Salvador", NorthAmerica, &[]),
    CountryEntry::new("GT", "危地马拉", "Guatemala", NorthAmerica, &[]),
    CountryEntry::new("BZ", "伯里兹", "Belize", NorthAmerica, &[]),
    CountryEntry::new("HT", "海地", "Haiti", NorthAmerica, &[]),
    CountryEntry::new("DO", "多米尼加共和国", "Dominican Republic", NorthAmerica, &[]),
    CountryEntry::new("JM", "牙买加", "Jamaica", NorthAmerica, &[]),
    CountryEntry::new("TT", "特立尼达和多巴哥", "Trinidad and Tobago", NorthAmerica, &[]),
    CountryEntry::new("BS", "巴哈马", "Bahamas", NorthAmerica, &[]),
    CountryEntry::new("BB", "巴巴多斯", "Barbados", NorthAmerica, &[]),
    CountryEntry::new("GD", "格林纳达", "Grenada", NorthAmerica, &[]),
    CountryEntry::new("LC", "圣卢西亚", "Saint Lucia", NorthAmerica, &["St Lucia"]),
    CountryEntry::new("VC", "圣文森特和格陵纳丁斯", "Saint Vincent and the Grenadines", NorthAmerica, &["St Vincent and the Grenadines"]),
    CountryEntry::new("KN", "圣基茨和尼维斯", "Saint Kitts-Nevis", NorthAmerica, &["Saint Kitts and Nevis", "St Kitts and Nevis"]),
    CountryEntry::new("AG", "安提瓜和巴布达", "Antigua and Barbuda", NorthAmerica, &[]),
    CountryEntry::new("DM", "多米尼克", "Dominica", NorthAmerica, &[]),
    CountryEntry::new("PR", "波多黎各", "Puerto Rico", NorthAmerica, &[]),
    CountryEntry::new("VI", "美属维尔京群岛", "Virgin Islands U.S.", NorthAmerica, &[]),
    CountryEntry::new("VG", "英属维尔京群岛", "British Virgin Islands", NorthAmerica, &[]),
    CountryEntry::new("AI", "安圭拉岛", "Anguilla", NorthAmerica, &[]),
    CountryEntry::new("MS", "蒙塞拉特岛", "Montserrat", NorthAmerica, &[]),
    CountryEntry::new("KY", "开曼群岛", "Cayman Islands", NorthAmerica, &[]),
    CountryEntry::new("TC", "特克斯和凯科斯群岛", "Turks and Caicos Islands", NorthAmerica, &[]),
    CountryEntry::new("BM", "百慕大", "Bermuda", NorthAmerica, &[]),
    CountryEntry::new("GL", "格陵兰岛", "Greenland", NorthAmerica, &[]),
    CountryEntry::new("PM", "圣皮埃尔和密克隆岛", "Saint Pierre and Miquelon", NorthAmerica, &[]),
    CountryEntry::new("AW", "阿鲁巴", "Aruba", NorthAmerica, &[]),
    CountryEntry::new("CW", "库拉索", "Curacao", NorthAmerica, &["Curaçao"]),
    CountryEntry::new("AN", "荷属安德列斯", "Netherlands Antilles", NorthAmerica, &[]),
    CountryEntry::new("GP", "法属德洛普群岛", "Guadeloupe", NorthAmerica, &[]),
    CountryEntry::new("MQ", "法属马提尼克群岛", "Martinique", NorthAmerica, &[]),
    CountryEntry::new("MF", "法属圣马丁", "Saint-Martin", NorthAmerica, &[]),
    CountryEntry::new("UM", "美国外围岛屿", "United States Minor Outlying Islands", NorthAmerica, &[]),
    CountryEntry::new("HW", "夏威夷", "Hawaii", NorthAmerica, &[]),
    CountryEntry::new("AK", "阿拉斯加", "Alaska", NorthAmerica, &[]),
    CountryEntry::new("BQ", "博奈尔岛", "Bonaire", NorthAmerica, &[]),
    CountryEntry::new("XE", "圣尤斯特歇斯岛", "Saint Eustatius", NorthAmerica, &[]),
    CountryEntry::new("XM", "荷属圣马丁", "Sint Maarten", NorthAmerica, &[]),
    CountryEntry::new("XN", "尼维斯岛", "Nevis", NorthAmerica, &[]),
    // South America
    CountryEntry::new("BR", "巴西", "Brazil", SouthAmerica, &[]),
    CountryEntry::new("AR", "阿根廷", "Argentina", SouthAmerica, &[]),
    CountryEntry::new("CL", "智利", "Chile", SouthAmerica, &[]),
    CountryEntry::new("CO", "哥伦比亚", "Colombia", SouthAmerica, &[]),
    CountryEntry::new("VE", "委内瑞拉", "Venezuela", SouthAmerica, &[]),
    CountryEntry::new("PE", "秘鲁", "Peru", SouthAmerica, &[]),
    CountryEntry::new("EC", "厄瓜多尔", "Ecuador", SouthAmerica, &[]),
    CountryEntry::new("BO", "玻利维亚", "Bolivia", SouthAmerica, &[]),
    CountryEntry::new("PY", "巴拉圭", "Paraguay", SouthAmerica, &[]),
    CountryEntry::new("UY", "乌拉圭", "Uruguay", SouthAmerica, &[]),
    CountryEntry::new("GY", "圭亚那", "Guyana", SouthAmerica, &[]),
    CountryEntry::new("SR", "苏里南", "Suriname", SouthAmerica, &[]),
    CountryEntry::new("GF", "法属圭亚那", "French Guiana", SouthAmerica, &[]),
    CountryEntry::new("FK", "福克兰群岛", "Falkland Islands", SouthAmerica, &[]),
    CountryEntry::new("GS", "南乔治亚岛和南桑威奇群岛", "South Georgia and The South Sandwich Islands", SouthAmerica, &[]),
    CountryEntry::new("BL", "圣巴托洛缪岛", "Saint-Barthélemy", SouthAmerica, &[]),
    // Africa
    CountryEntry::new("EG", "埃及", "Egypt", Africa, &[]),
    CountryEntry::new("ZA", "南非", "South Africa", Africa, &[]),
    CountryEntry::new("NG", "尼日利亚", "Nigeria", Africa, &[]),
    CountryEntry::new("ET", "埃塞俄比亚", "Ethiopia", Africa, &[]),
    CountryEntry::new("KE", "肯尼亚", "Kenya", Africa, &[]),
    CountryEntry::new("TZ", "坦桑尼亚", "Tanzania", Africa, &["United Republic of Tanzania"]),
    CountryEntry::new("UG", "乌干达", "Uganda", Africa, &[]),
    CountryEntry::new("DZ", "阿尔及利亚", "Algeria", Africa, &[]),
    CountryEntry::new("MA", "摩洛哥", "Morocco", Africa, &[]),
    CountryEntry::new("TN", "突尼斯", "Tunisia", Africa, &[]),
    CountryEntry::new("LY", "利比亚", "Libya", Africa, &[]),
    CountryEntry::new("SD", "苏丹", "Sudan", Africa, &[]),
    CountryEntry::new("SS", "南苏丹", "South Sudan", Africa, &[]),
    CountryEntry::new("SO", "索马里", "Somalia", Africa, &[]),
    CountryEntry::new("DJ", "吉布提", "Djibouti", Africa, &[]),
    CountryEntry::new("ER", "厄立特里亚", "Eritrea", Africa, &[]),
    CountryEntry::new("GH", "加纳", "Ghana", Africa, &[]),
    CountryEntry::new("CI", "科特迪瓦", "Ivory Coast", Africa, &["Côte d'Ivoire", "Cote d'Ivoire"]),
    CountryEntry::new("SN", "塞内加尔", "Senegal", Africa, &[]),
    CountryEntry::new("ML", "马里", "Mali", Africa, &[]),
    CountryEntry::new("BF", "布基纳法索", "Burkina Faso", Africa, &[]),
    CountryEntry::new("NE", "尼日尔", "Niger", Africa, &[]),
    CountryEntry::new("TD", "乍得", "Chad", Africa, &[]),
    CountryEntry::new("CM", "喀麦隆", "Cameroon", Africa, &[]),
    CountryEntry::new("CF", "中非", "Central African Republic", Africa, &[]),
    CountryEntry::new("CG", "刚果", "The Republic of Congo", Africa, &["Congo", "Republic of the Congo"]),
    CountryEntry::new("CD", "刚果民主共和国", "Democratic Republic of the Congo", Africa, &["DR Congo", "DRC"]),
    CountryEntry::new("ZR", "扎伊尔共和国", "The Republic of Zaire", Africa, &[]),
    CountryEntry::new("GA", "加蓬", "Gabon Republic", Africa, &[]),
    CountryEntry::new("GQ", "赤道几内亚", "Equatorial Guinea", Africa, &[]),
    CountryEntry::new("ST", "圣多美和普林西比", "Sao Tome and Principe", Africa, &[]),
    CountryEntry::new("AO", "安哥拉", "Angola", Africa, &[]),
    CountryEntry::new("ZM", "赞比亚", "Zambia", Africa, &[]),
    CountryEntry::new("ZW", "津巴布韦", "Zimbabwe", Africa, &[]),
    CountryEntry::new("MW", "马拉维", "Malawi", Africa, &[]),
    CountryEntry::new("MZ", "莫桑比克", "Mozambique", Africa, &[]),
    CountryEntry::new("NA", "纳米比亚", "Namibia", Africa, &[]),
    CountryEntry::new("BW", "博茨瓦纳", "Botswana", Africa, &[]),
    CountryEntry::new("LS", "莱索托", "Lesotho", Africa, &[]),
    CountryEntry::new("SZ", "斯威士兰", "Swaziland", Africa, &["Eswatini"]),
    CountryEntry::new("MG", "马达加斯加", "Madagascar", Africa, &[]),
    CountryEntry::new("MU", "毛里求斯", "Mauritius", Africa, &[]),
    CountryEntry::new("SC", "塞舌尔", "Seychelles", Africa, &[]),
    CountryEntry::new("KM", "科摩罗", "Comoros", Africa, &[]),
    CountryEntry::new("RE", "留尼旺岛", "Reunion", Africa, &["Réunion"]),
    CountryEntry::new("YT", "马约特岛", "Mayotte", Africa, &[]),
    CountryEntry::new("CV", "佛得角", "Cape Verde Islands", Africa, &["Cabo Verde", "Cape Verde"]),
    CountryEntry::new("GN", "几内亚", "Guinea", Africa, &[]),
    CountryEntry::new("GW", "几内亚比绍", "Guinea-Bissau", Africa, &[]),
    CountryEntry::new("SL", "塞拉利昂", "Sierra Leone", Africa, &[]),
    CountryEntry::new("LR", "利比里亚", "Liberia", Africa, &[]),
    CountryEntry::new("TG", "多哥", "Togo", Africa, &[]),
    CountryEntry::new("BJ", "贝宁", "Benin", Africa, &[]),
    CountryEntry::new("GM", "冈比亚", "Gambia", Africa, &[]),
    CountryEntry::new("MR", "毛里塔尼亚", "Mauritania", Africa, &[]),
    CountryEntry::new("RW", "卢旺达", "Rwanda", Africa, &[]),
    CountryEntry::new("BI", "布隆迪", "Burundi", Africa, &[]),
    CountryEntry::new("SH", "圣赫勒拿", "Saint Helena", Africa, &[]),
    CountryEntry::new("EH", "西撒哈拉", "Western Sahara", Africa, &[]),
    CountryEntry::new("IC", "加那利群岛", "Canary Islands", Africa, &[]),
    CountryEntry::new("XI", "马德拉群岛", "Madeira", Africa, &[]),
    CountryEntry::new("XD", "阿森松", "Ascension", Africa, &[]),
    CountryEntry::new("XB", "特里斯坦-达库尼亚群岛", "Tristan Da Cunha", Africa, &[]),
    // Oceania
    CountryEntry::new("AU", "澳大利亚", "Australia", Oceania, &[]),
    CountryEntry::new("NZ", "新西兰", "New Zealand", Oceania, &[]),
    CountryEntry::new("PG", "巴布亚新几内亚", "Papua New Guinea", Oceania, &[]),
    CountryEntry::new("FJ", "斐济", "Fiji", Oceania, &[]),
    CountryEntry::new("SB", "所罗门群岛", "Solomon Islands", Oceania, &[]),
    CountryEntry::new("VU", "瓦努阿鲁", "Vanuatu", Oceania, &[]),
    CountryEntry::new("NC", "新卡里多尼亚", "New Caledonia", Oceania, &[]),
    CountryEntry::new("PF", "法属玻里尼西亚", "French Polynesia", Oceania, &[]),
    CountryEntry::new("WS", "萨摩亚（西萨摩亚）", "Western Samoa", Oceania, &["Samoa"]),
    CountryEntry::new("AS", "东萨摩亚", "American Samoa", Oceania, &[]),
    CountryEntry::new("TO", "汤加", "Tonga", Oceania, &[]),
    CountryEntry::new("KI", "基里巴斯", "Kiribati", Oceania, &[]),
    CountryEntry::new("TV", "图瓦卢", "Tuvalu", Oceania, &[]),
    CountryEntry::new("NR", "瑙鲁", "Nauru", Oceania, &[]),
    CountryEntry::new("PW", "帕劳", "Palau", Oceania, &[]),
    CountryEntry::new("FM", "米克罗尼西亚", "Micronesia", Oceania, &["Federated States of Micronesia"]),
    CountryEntry::new("MH", "马绍尔群岛", "Marshall Islands", Oceania, &[]),
    CountryEntry::new("CK", "库克群岛", "Cook Islands", Oceania, &[]),
    CountryEntry::new("NU", "纽爱", "Niue", Oceania, &[]),
    CountryEntry::new("TK", "托克劳", "Tokelau", Oceania, &[]),
    CountryEntry::new("WF", "瓦利斯群岛和富图纳群岛", "Wallis and Futuna", Oceania, &[]),
    CountryEntry::new("PN", "皮特凯恩群岛", "Pitcairn Islands", Oceania, &[]),
    CountryEntry::new("GU", "关岛", "Guam", Oceania, &[]),
    CountryEntry::new("MP", "北马里亚纳群岛", "Northern Mariana Islands", Oceania, &[]),
    CountryEntry::new("NF", "诺福克岛", "Norfolk Island", Oceania, &[]),
    CountryEntry::new("CC", "科科斯基林群岛", "Cocos Keeling Islands", Oceania, &[]),
    CountryEntry::new("CX", "圣诞岛", "Christmas Island", Oceania, &[]),
    CountryEntry::new("XL", "新西兰属土岛屿", "New Zealand Islands Territories", Oceania, &[]),
    // Antarctica
    CountryEntry::new("BV", "布韦岛", "Bouvet Island", Antarctica, &[]),
];
