use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_price() -> Value {
    Value::String("0".to_string())
}

/// A listing exactly as a store spider emitted it.
///
/// Every field is optional on the wire: a missing `name` becomes `""` and a
/// missing `price` becomes `"0"`. The price is never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Brand as reported by the store, if any. Often `"UNKNOWN"` or empty.
    #[serde(default, rename = "brand")]
    pub brand_hint: Option<String>,
    #[serde(default = "default_price")]
    pub price: Value,
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RawListing {
    /// Convenience constructor for a listing with only a title.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            brand_hint: None,
            price: default_price(),
            store: None,
            url: None,
        }
    }
}

/// Canonical manufacturer used for cross-store comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Brand {
    Apple,
    Samsung,
    Xiaomi,
    Huawei,
    Motorola,
    Oppo,
    Vivo,
    Sony,
    Nintendo,
    Jbl,
    Bose,
    Microsoft,
    Tecno,
    Infinix,
    Lenovo,
    Nothing,
    Nokia,
    Lg,
    Tcl,
    Alcatel,
    Blackberry,
}

impl Brand {
    pub const ALL: [Brand; 21] = [
        Brand::Apple,
        Brand::Samsung,
        Brand::Xiaomi,
        Brand::Huawei,
        Brand::Motorola,
        Brand::Oppo,
        Brand::Vivo,
        Brand::Sony,
        Brand::Nintendo,
        Brand::Jbl,
        Brand::Bose,
        Brand::Microsoft,
        Brand::Tecno,
        Brand::Infinix,
        Brand::Lenovo,
        Brand::Nothing,
        Brand::Nokia,
        Brand::Lg,
        Brand::Tcl,
        Brand::Alcatel,
        Brand::Blackberry,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Brand::Apple => "APPLE",
            Brand::Samsung => "SAMSUNG",
            Brand::Xiaomi => "XIAOMI",
            Brand::Huawei => "HUAWEI",
            Brand::Motorola => "MOTOROLA",
            Brand::Oppo => "OPPO",
            Brand::Vivo => "VIVO",
            Brand::Sony => "SONY",
            Brand::Nintendo => "NINTENDO",
            Brand::Jbl => "JBL",
            Brand::Bose => "BOSE",
            Brand::Microsoft => "MICROSOFT",
            Brand::Tecno => "TECNO",
            Brand::Infinix => "INFINIX",
            Brand::Lenovo => "LENOVO",
            Brand::Nothing => "NOTHING",
            Brand::Nokia => "NOKIA",
            Brand::Lg => "LG",
            Brand::Tcl => "TCL",
            Brand::Alcatel => "ALCATEL",
            Brand::Blackberry => "BLACKBERRY",
        }
    }

    /// Looks up a brand by its canonical upper-case name.
    #[must_use]
    pub fn from_canonical(name: &str) -> Option<Brand> {
        Brand::ALL.into_iter().find(|b| b.as_str() == name)
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Retail freshness category.
///
/// Variants are declared in ascending priority so the derived `Ord` resolves
/// conflicts: `Usado > ComoNuevo > Seminuevo > Nuevo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "NUEVO")]
    Nuevo,
    #[serde(rename = "SEMINUEVO")]
    Seminuevo,
    #[serde(rename = "COMO NUEVO")]
    ComoNuevo,
    #[serde(rename = "USADO")]
    Usado,
}

impl Condition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Nuevo => "NUEVO",
            Condition::Seminuevo => "SEMINUEVO",
            Condition::ComoNuevo => "COMO NUEVO",
            Condition::Usado => "USADO",
        }
    }

    /// Only new and ex-display stock is published.
    #[must_use]
    pub fn is_publishable(self) -> bool {
        matches!(self, Condition::Nuevo | Condition::Seminuevo)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimType {
    #[serde(rename = "SIM FISICA")]
    Physical,
    #[serde(rename = "SIM VIRTUAL")]
    Virtual,
}

impl SimType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SimType::Physical => "SIM FISICA",
            SimType::Virtual => "SIM VIRTUAL",
        }
    }
}

impl std::fmt::Display for SimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing after normalization, ready for cross-store comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedListing {
    /// e.g. `"APPLE IPHONE 13 SIM FISICA SEMINUEVO 128GB"`.
    pub normalized_name: String,
    pub original_name: String,
    pub brand: Option<Brand>,
    pub condition: Condition,
    /// Only ever set for handsets.
    pub sim_type: Option<SimType>,
    /// Canonical storage denomination such as `"128GB"` or `"1TB"`.
    pub storage_capacity: Option<String>,
    /// Passed through from the store untouched.
    pub price: Value,
    pub url: String,
}
