//! Card information submitted for tokenization.

use serde::{Deserialize, Serialize};

/// Card data forwarded to the gateway to obtain a card token.
///
/// Fields are kept as strings, exactly as the checkout form produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInformation {
    /// Amount to be charged, formatted by the caller (e.g. `"120.00"`).
    pub amount: String,
    /// Card brand as reported by `get_card_flag` (e.g. `"visa"`).
    pub card_brand: String,
    /// Card verification value.
    pub card_cvv: String,
    /// Two-digit expiration month.
    pub card_expiration_month: String,
    /// Four-digit expiration year.
    pub card_expiration_year: String,
    /// Full card number.
    pub card_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_gateway_field_names() {
        let card = CardInformation {
            amount: "10.00".into(),
            card_brand: "visa".into(),
            card_cvv: "123".into(),
            card_expiration_month: "12".into(),
            card_expiration_year: "2030".into(),
            card_number: "4111111111111111".into(),
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["cardBrand"], "visa");
        assert_eq!(json["cardExpirationYear"], "2030");
        assert_eq!(json["cardNumber"], "4111111111111111");
    }
}
