//! Closed vocabulary driving the rule cascade.
//!
//! Entries are plain upper-case words or phrases; [`crate::ruleset::RuleSet`]
//! compiles them into whole-word patterns once at startup. Table order is
//! significant wherever a slice (rather than a set) is used.

use pricecomp_core::{Brand, Condition, SimType};

/// Store-reported brand values that mean "no brand".
pub(crate) const UNKNOWN_BRAND_SENTINEL: &str = "UNKNOWN";

/// Store brand hints that name a sub-brand or product line.
pub(crate) const BRAND_ALIASES: &[(&str, Brand)] = &[
    ("IPHONE", Brand::Apple),
    ("POCO", Brand::Xiaomi),
    ("POCOPHONE", Brand::Xiaomi),
    ("REDMI", Brand::Xiaomi),
    ("MI", Brand::Xiaomi),
    ("GALAXY", Brand::Samsung),
    ("HONOR", Brand::Huawei),
    ("REALME", Brand::Oppo),
    ("ONEPLUS", Brand::Oppo),
    ("IQOO", Brand::Vivo),
    ("MOTO", Brand::Motorola),
];

/// Product nouns that imply a manufacturer without naming it.
pub(crate) const IMPLICIT_BRANDS: &[(&str, Brand)] = &[
    ("AIRPODS", Brand::Apple),
    ("IPAD", Brand::Apple),
    ("MACBOOK", Brand::Apple),
    ("IMAC", Brand::Apple),
    ("IWATCH", Brand::Apple),
    ("PLAYSTATION", Brand::Sony),
    ("PS5", Brand::Sony),
    ("PS4", Brand::Sony),
    ("XBOX", Brand::Microsoft),
    ("SURFACE", Brand::Microsoft),
];

/// Brand detection table. Sub-brands MUST precede the parent name and
/// narrower brands precede broader ones: HONOR before HUAWEI, IQOO before
/// VIVO, POCO/REDMI before XIAOMI, and XIAOMI's bare "MI" last of all the
/// phone makers.
pub(crate) const BRAND_PATTERNS: &[(Brand, &[&str])] = &[
    (
        Brand::Apple,
        &[
            "IPHONE",
            "IPAD",
            "MACBOOK",
            "AIRPODS",
            "IMAC",
            "WATCH SERIES",
            "WATCH ULTRA",
            "APPLE",
        ],
    ),
    (Brand::Samsung, &["GALAXY", "SAMSUNG"]),
    (Brand::Huawei, &["HONOR", "HUAWEI"]),
    (Brand::Motorola, &["MOTOROLA", "MOTO"]),
    (Brand::Oppo, &["ONEPLUS", "REALME", "OPPO"]),
    (Brand::Vivo, &["IQOO", "VIVO"]),
    (
        Brand::Xiaomi,
        &["POCOPHONE", "REDMI", "POCO", "XIAOMI", "MI"],
    ),
    (Brand::Sony, &["PLAYSTATION", "PS5", "PS4", "SONY"]),
    (Brand::Nintendo, &["NINTENDO", "SWITCH"]),
    (Brand::Jbl, &["JBL"]),
    (Brand::Bose, &["BOSE"]),
    (Brand::Microsoft, &["XBOX", "SURFACE", "MICROSOFT"]),
    (Brand::Tecno, &["TECNO"]),
    (Brand::Infinix, &["INFINIX"]),
    (Brand::Lenovo, &["LENOVO"]),
    (Brand::Nothing, &["NOTHING"]),
    (Brand::Nokia, &["NOKIA"]),
    (Brand::Lg, &["LG"]),
    (Brand::Tcl, &["TCL"]),
    (Brand::Alcatel, &["ALCATEL"]),
    (Brand::Blackberry, &["BLACKBERRY"]),
];

/// Sub-brand mentions stripped from the residual name alongside the brand.
pub(crate) const RELATED_SUB_BRANDS: &[(Brand, &[&str])] = &[
    (Brand::Huawei, &["HONOR"]),
    (Brand::Xiaomi, &["REDMI", "POCO", "POCOPHONE", "MI"]),
    (Brand::Oppo, &["REALME", "ONEPLUS"]),
    (Brand::Vivo, &["IQOO"]),
    (Brand::Apple, &["IPHONE", "IPAD", "MACBOOK", "AIRPODS"]),
    (Brand::Samsung, &["GALAXY"]),
    (Brand::Motorola, &["MOTO"]),
];

/// Sub-brands that name the product line itself and stay in the name.
pub(crate) const PRODUCT_LINE_NAMES: &[(Brand, &[&str])] = &[(
    Brand::Apple,
    &["IPHONE", "IPAD", "MACBOOK", "AIRPODS"],
)];

/// Ex-display jargon collapsed to SEMINUEVO before anything else runs.
/// Most specific first.
pub(crate) const EX_DISPLAY_PATTERNS: &[&str] = &[
    r"DE\s+EXH\s*PREMIUM",
    r"DE\s+EXH",
    r"EXH\s*PREMIUM",
    r"EXH",
];

/// Canonical token every ex-display variant collapses into.
pub(crate) const EX_DISPLAY_CANONICAL: &str = "SEMINUEVO";

/// Condition patterns, most to least specific.
pub(crate) const CONDITION_PATTERNS: &[(&str, Condition)] = &[
    (r"COMO\s+NUEVO", Condition::ComoNuevo),
    (r"SEMI[\s-]*NUEVO", Condition::Seminuevo),
    (r"DE\s+EXH\s*PREMIUM", Condition::Seminuevo),
    (r"DE\s+EXH", Condition::Seminuevo),
    (r"EXH\s*PREMIUM", Condition::Seminuevo),
    (r"EXH", Condition::Seminuevo),
    (r"USADO", Condition::Usado),
    (r"OUTLET", Condition::Usado),
    (r"REFURBISHED", Condition::Usado),
    (r"REACONDICIONADO", Condition::Usado),
    (r"CPO", Condition::Usado),
    (r"OPEN[\s-]*BOX", Condition::Usado),
    (r"NUEVO", Condition::Nuevo),
];

/// SIM synonyms in match order. Virtual first, then physical, then the
/// generic DUAL SIM which retail uses for two physical trays. The hyphen in
/// E-SIM and S-FIS is optional and may carry spaces.
pub(crate) const SIM_PATTERNS: &[(&str, SimType)] = &[
    (r"E\s*-?\s*SIM", SimType::Virtual),
    (r"SIM\s+VIRTUAL", SimType::Virtual),
    (r"VIRTUAL", SimType::Virtual),
    (r"DUAL\s+SIM\s+FISICA", SimType::Physical),
    (r"SIM\s+FISIC[AO]", SimType::Physical),
    (r"S\s*-?\s*FIS", SimType::Physical),
    (r"FISIC[AO]", SimType::Physical),
    (r"DUAL\s+SIM", SimType::Physical),
];

/// SIM shorthand stripped from every residual name, handset or not.
pub(crate) const SIM_LEFTOVERS: &[&str] = &[r"E\s*-?\s*SIM", r"S\s*-?\s*FIS"];

/// Storage sizes a listing can advertise, by number of gigabytes.
pub(crate) const STORAGE_GB: &[&str] = &["128", "256", "512", "1024", "2048"];

/// Storage sizes written in terabytes.
pub(crate) const STORAGE_TB: &[&str] = &["1", "2"];

/// RAM sizes: recognised only to be stripped.
pub(crate) const RAM_GB: &[&str] = &["3", "4", "6", "8", "12", "16", "32", "64"];

/// Denominations rewritten to their canonical unit.
pub(crate) const CAPACITY_UNITS: &[(&str, &str)] = &[("1024GB", "1TB"), ("2048GB", "2TB")];

/// Accessory, wearable, tablet, laptop, console and peripheral nouns. Any
/// hit means the listing is not a handset.
pub(crate) const NON_MOBILE_CUES: &[&str] = &[
    "AIRPODS",
    "AUDIFONOS",
    "EARBUDS",
    "HEADPHONES",
    "BUDS",
    "WATCH",
    "SMARTWATCH",
    "RELOJ",
    "RELOJES",
    "IPAD",
    "TABLET",
    "TAB",
    "PAD",
    "MACBOOK",
    "LAPTOP",
    "NOTEBOOK",
    "COMPUTER",
    "CARGADOR",
    "CHARGER",
    "CABLE",
    "CUBO",
    "MOUSE",
    "TECLADO",
    "KEYBOARD",
    "ACCESORIOS",
    "ACCESORIO",
    "FUNDA",
    "CASE",
    "PROTECTOR",
    "VIDRIO",
    "SCREEN",
    "SPEAKER",
    "PARLANTE",
    "BOCINA",
    "POWERBANK",
    "BATERIA",
    "CONSOLA",
    "PLAYSTATION",
    "PS4",
    "PS5",
    "XBOX",
    "NINTENDO",
    "PENCIL",
    "STYLUS",
];

/// Phone makers and generic handset nouns.
pub(crate) const MOBILE_CUES: &[&str] = &[
    "IPHONE",
    "GALAXY",
    "SAMSUNG",
    "REDMI",
    "POCO",
    "XIAOMI",
    "HUAWEI",
    "HONOR",
    "MOTOROLA",
    "MOTO",
    "OPPO",
    "REALME",
    "ONEPLUS",
    "VIVO",
    "IQOO",
    "NOKIA",
    "TECNO",
    "INFINIX",
    "NOTHING",
    "BLACKBERRY",
    "LG",
    "CELULAR",
    "CELULARES",
    "SMARTPHONE",
    "TELEFONO",
    "MOVIL",
];

/// Words with no descriptive value for comparison.
pub(crate) const NOISE_WORDS: &[&str] = &[
    // category and filler
    "CELULAR",
    "CELULARES",
    "ALL",
    "GADGETS",
    "ACCESORIOS",
    "ACCESORIO",
    "ELECTRONICA",
    "TECNOLOGIA",
    "TECH",
    "CALIDAD",
    "EN",
    "SONIDO",
    "ADAPTADORES",
    "CABLES",
    "FULL",
    "RAM",
    "WIFI",
    "CELLULAR",
    "GPS",
    "DE",
    "LA",
    "EL",
    "Y",
    "UN",
    "UNA",
    "CON",
    // marketing
    "ORIGINAL",
    "GARANTIA",
    "SELLADO",
    "OFERTA",
    "PROMOCION",
    "ESPECIAL",
    "PREVENTA",
    // colors and materials
    "NEGRO",
    "BLANCO",
    "AZUL",
    "ROJO",
    "VERDE",
    "AMARILLO",
    "MORADO",
    "ROSADO",
    "ROSA",
    "DORADO",
    "GRIS",
    "PLATEADO",
    "LILA",
    "TITANIUM",
    "TITANNIUM",
    "TITANIO",
    "NATURAL",
    "DESERT",
    "MIDNIGHT",
    "STARLIGHT",
    "BLACK",
    "WHITE",
    "PURPLE",
    "BLUE",
    "RED",
    "GREEN",
    "YELLOW",
    "PINK",
    "GOLD",
    "SILVER",
    "SPACE",
    "GRAY",
    "GREY",
    "GRAPHITE",
];

/// Network generations, kept only on handsets.
pub(crate) const NETWORK_TOKENS: &[&str] = &["2G", "3G", "4G", "5G", "LTE"];

/// Reseller names whose listings are never published.
pub(crate) const BANNED_SELLER_MARKERS: &[&str] = &["LAMPERT"];

/// Raw-title markers that disqualify a listing whatever its resolved condition.
pub(crate) const DISQUALIFIED_CONDITION_MARKERS: &[&str] = &[r"OPEN[\s-]*BOX", r"CPO"];

/// Raw-title evidence that a listing should come out SEMINUEVO.
pub(crate) const SEMINUEVO_EVIDENCE: &[&str] = &[
    r"DE\s+EXH\s*PREMIUM",
    r"DE\s+EXH",
    r"EXH\s*PREMIUM",
    r"EXH",
    r"SEMI\s*NUEVO",
];
