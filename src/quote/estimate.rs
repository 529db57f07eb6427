/// Per-unit price band for a product category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rate {
    pub min: u64,
    pub max: u64,
}

const DEFAULT_RATE: Rate = Rate { min: 10, max: 30 };

pub fn rate_for(category: &str) -> Rate {
    match category {
        "business" => Rate { min: 5, max: 15 },
        "wedding" => Rate { min: 20, max: 50 },
        "packaging" => Rate { min: 10, max: 30 },
        "merchandise" => Rate { min: 100, max: 300 },
        _ => DEFAULT_RATE,
    }
}

/// Integer prefix of `raw`, the way a browser parses a typed quantity.
/// Negative or non-numeric input counts as zero.
pub fn parse_quantity(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Estimate {
    /// Not enough input yet.
    Pending,
    Range { min: u64, max: u64 },
}

impl Estimate {
    pub fn compute(category: &str, quantity: &str) -> Self {
        let quantity = parse_quantity(quantity);
        if category.is_empty() || quantity == 0 {
            return Estimate::Pending;
        }
        let rate = rate_for(category);
        Estimate::Range {
            min: rate.min.saturating_mul(quantity),
            max: rate.max.saturating_mul(quantity),
        }
    }

    /// Display strings for the min and max slots.
    pub fn display(&self) -> (String, String) {
        match self {
            Estimate::Pending => ("-".to_string(), "-".to_string()),
            Estimate::Range { min, max } => (group_thousands(*min), group_thousands(*max)),
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
