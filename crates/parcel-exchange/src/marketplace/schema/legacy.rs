use serde::Serialize;

const FROM_MARKER: &str = " | From: ";
const SEPARATOR: &str = " | ";

/// Parcel written by the older compose form as one human-readable line:
/// `{description} | From: {from} | To: {to} | Weight: {weight}kg[ | Price: ₹{price}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyParcel {
    pub description: String,
    pub from: String,
    pub to: String,
    /// Weight as typed, without the `kg` suffix.
    pub weight: String,
    /// Price as typed, without the currency sign.
    pub price: Option<String>,
}

impl LegacyParcel {
    pub fn parse(text: &str) -> Option<Self> {
        let cleaned = text.replace(['\u{feff}', '\u{200b}'], "");
        // The description is free text and may itself contain separators.
        let split_at = cleaned.rfind(FROM_MARKER)?;
        let description = cleaned[..split_at].trim();
        let tail = &cleaned[split_at + SEPARATOR.len()..];

        let mut segments = tail.split(SEPARATOR);
        let from = field(segments.next()?, "From:")?;
        let to = field(segments.next()?, "To:")?;
        let weight = field(segments.next()?, "Weight:")?;
        let weight = weight.strip_suffix("kg").unwrap_or(weight).trim();
        let price = match segments.next() {
            Some(segment) => {
                let raw = field(segment, "Price:")?;
                Some(raw.trim_start_matches('₹').trim().to_string())
            }
            None => None,
        };
        if segments.next().is_some() {
            return None;
        }

        if description.is_empty() || from.is_empty() || to.is_empty() {
            return None;
        }

        Some(Self {
            description: description.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            weight: weight.to_string(),
            price,
        })
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    pub fn price_amount(&self) -> Option<f64> {
        self.price
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }
}

fn field<'a>(segment: &'a str, label: &str) -> Option<&'a str> {
    segment.trim().strip_prefix(label).map(str::trim)
}
