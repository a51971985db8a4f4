use crate::types::{InitBlock, Variant};

/// The two fields every patch introduces.
pub const FIELD_NAMES: [&str; 2] = ["rrspRoom", "tfsaRoom"];

// (label, property) per account type, rendered in this order.
const ACCOUNTS: [(&str, &str); 2] = [("RRSP", "rrspRoom"), ("TFSA", "tfsaRoom")];

const FIELD_TEMPLATE: &str = r#"

      <Grid item xs={12} md={4}>
        <TextField
          fullWidth
          label="{label_prefix}{account} Contribution Room"
          type="number"
          value={{path}{field} || 0}
          onChange={(e) => {on_change}}
          InputProps={{
            startAdornment: <InputAdornment position="start">$</InputAdornment>,
          }}
        />
      </Grid>"#;

const TYPE_FIELDS: &str = "\n\n  // Contribution Room\n  rrspRoom: number;\n  tfsaRoom: number;";

const CONTRIBUTION_VALUES: &str = "\n\n  // Contribution Room\n  rrspRoom: 0,\n  tfsaRoom: 0,";

const SPOUSE_DEFAULT_VALUES: &str = "\n        rrspRoom: 0,\n        tfsaRoom: 0,";

impl Variant {
    pub fn label_prefix(&self) -> &'static str {
        match self {
            Variant::Primary => "",
            Variant::Spouse => "Spouse's ",
        }
    }

    pub fn property_path(&self) -> &'static str {
        match self {
            Variant::Primary => "userInput.",
            Variant::Spouse => "userInput.spouseInfo?.",
        }
    }

    /// The onChange body that stores `value` into `field`.
    pub fn change_handler(&self, field: &str, value: &str) -> String {
        match self {
            Variant::Primary => format!("onInputChange('{}', {})", field, value),
            Variant::Spouse => format!(
                "onInputChange('spouseInfo', {{ ...userInput.spouseInfo!, {}: {} }})",
                field, value
            ),
        }
    }

    /// Rendered label of one account's field, e.g. `Spouse's TFSA Contribution Room`.
    pub fn field_label(&self, account: &str) -> String {
        format!("{}{} Contribution Room", self.label_prefix(), account)
    }
}

/// Builds the markup for both contribution room fields.
///
/// The result starts with a newline and is meant to be spliced directly after
/// the closing `</Grid>` of an existing field block.
pub fn build_ui_snippet(variant: Variant) -> String {
    ACCOUNTS
        .iter()
        .map(|(account, field)| {
            FIELD_TEMPLATE
                .replace("{label_prefix}", variant.label_prefix())
                .replace("{account}", account)
                .replace("{path}", variant.property_path())
                .replace(
                    "{on_change}",
                    &variant.change_handler(field, "parseFloat(e.target.value)"),
                )
                .replace("{field}", field)
        })
        .collect()
}

pub fn type_fields() -> &'static str {
    TYPE_FIELDS
}

pub fn initializer_fields(block: InitBlock) -> &'static str {
    match block {
        InitBlock::Contribution => CONTRIBUTION_VALUES,
        InitBlock::SpouseDefaults => SPOUSE_DEFAULT_VALUES,
    }
}

/// True when `body` already mentions either contribution room field.
pub fn mentions_fields(body: &str) -> bool {
    FIELD_NAMES.iter().any(|name| body.contains(name))
}
