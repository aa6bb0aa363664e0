use rand::Rng;
use serde::Serialize;

pub const CARRIER: &str = "UPS";

pub const DROP_OFF_LOCATIONS: [&str; 3] = [
    "UPS Store - 123 Main St",
    "UPS Store - 456 Oak Ave",
    "Any UPS drop box",
];

/// A prepaid return shipping label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnLabel {
    pub success: bool,
    pub ran: String,
    pub order_id: String,
    pub tracking_number: String,
    pub label_url: String,
    pub carrier: String,
    pub drop_off_locations: Vec<String>,
    pub message: String,
}

/// Where the printable label for `ran` lives.
pub fn label_url(ran: &str) -> String {
    format!("https://returns.example.com/labels/{ran}.pdf")
}

/// Generates a label. The RAN is not checked against any issued authorization.
pub fn generate_return_label<R: Rng>(
    rng: &mut R,
    ran: &str,
    order_id: &str,
) -> ReturnLabel {
    let tracking_number = format!("RTN{}", rng.random_range(100_000..=999_999));
    let message = format!(
        "Return label generated! Download at the provided URL. \
         Use tracking number {tracking_number} to monitor your return shipment."
    );

    ReturnLabel {
        success: true,
        ran: ran.to_string(),
        order_id: order_id.to_string(),
        label_url: label_url(ran),
        carrier: CARRIER.to_string(),
        drop_off_locations: DROP_OFF_LOCATIONS.iter().map(|s| s.to_string()).collect(),
        message,
        tracking_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use regex::Regex;

    #[test]
    fn test_label_for_ran() {
        let mut rng = StdRng::seed_from_u64(10);
        let label = generate_return_label(&mut rng, "RAN-2-1234", "2");

        assert!(label.success);
        assert_eq!(label.label_url, "https://returns.example.com/labels/RAN-2-1234.pdf");
        assert_eq!(label.carrier, "UPS");
        assert_eq!(label.drop_off_locations.len(), 3);
        assert!(Regex::new(r"^RTN\d{6}$").unwrap().is_match(&label.tracking_number));
        assert!(label.message.contains(&label.tracking_number));
    }

    #[test]
    fn test_any_ran_is_accepted() {
        let mut rng = StdRng::seed_from_u64(11);
        let label = generate_return_label(&mut rng, "not-a-ran", "x");
        assert!(label.success);
        assert_eq!(label.label_url, label_url("not-a-ran"));
    }
}
