use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 11;

/// Canonical feature order; the scoring function is positional.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "fixed_acidity",
    "volatile_acidity",
    "citric_acid",
    "residual_sugar",
    "chlorides",
    "free_sulfur_dioxide",
    "total_sulfur_dioxide",
    "density",
    "pH",
    "sulphates",
    "alcohol",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineFeatures {
    pub fixed_acidity: f64,
    pub volatile_acidity: f64,
    pub citric_acid: f64,
    pub residual_sugar: f64,
    pub chlorides: f64,
    pub free_sulfur_dioxide: f64,
    pub total_sulfur_dioxide: f64,
    pub density: f64,
    // 上游 schema 的欄位名稱就是大寫 H
    #[serde(rename = "pH")]
    pub ph: f64,
    pub sulphates: f64,
    pub alcohol: f64,
}

impl WineFeatures {
    /// Validate a request body against the schema, collecting every failing
    /// field instead of stopping at the first one. Unknown extra fields are
    /// ignored; a numeric string such as `"7.4"` is coerced like the original
    /// service did.
    pub fn from_json(body: &serde_json::Value) -> std::result::Result<Self, Vec<FieldError>> {
        let map = match body.as_object() {
            Some(map) => map,
            None => {
                return Err(vec![FieldError::new(
                    "body",
                    "request body must be a JSON object",
                )])
            }
        };

        let mut values = [0.0f64; FEATURE_COUNT];
        let mut errors = Vec::new();

        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES.iter()) {
            match coerce_finite_f64(name, map.get(*name)) {
                Ok(value) => *slot = value,
                Err(error) => errors.push(error),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self::from_vector(values))
    }

    pub fn from_vector(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            fixed_acidity: values[0],
            volatile_acidity: values[1],
            citric_acid: values[2],
            residual_sugar: values[3],
            chlorides: values[4],
            free_sulfur_dioxide: values[5],
            total_sulfur_dioxide: values[6],
            density: values[7],
            ph: values[8],
            sulphates: values[9],
            alcohol: values[10],
        }
    }

    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.fixed_acidity,
            self.volatile_acidity,
            self.citric_acid,
            self.residual_sugar,
            self.chlorides,
            self.free_sulfur_dioxide,
            self.total_sulfur_dioxide,
            self.density,
            self.ph,
            self.sulphates,
            self.alcohol,
        ]
    }
}

fn coerce_finite_f64(
    field_name: &str,
    value: Option<&serde_json::Value>,
) -> std::result::Result<f64, FieldError> {
    let value = match value {
        Some(value) => value,
        None => return Err(FieldError::new(field_name, "field is required")),
    };

    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(FieldError::new(
            field_name,
            "value must be a finite number",
        )),
        None => Err(FieldError::new(field_name, "value is not a valid number")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: vec![
                "GET /health".to_string(),
                "POST /predict".to_string(),
            ],
        }
    }
}
