//! JSON output for plans and results.

use serde::Serialize;
use std::error::Error;

/// Pretty JSON for any result type.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::plan_subnets;

    #[test]
    fn test_plan_to_json() {
        let plan = plan_subnets("10.0.0.0", "24", "2").unwrap();
        let json = to_json(&plan).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["parent"], "10.0.0.0/24");
        assert_eq!(value["new_prefix"], 25);
        assert_eq!(value["subnets"][1]["network"], "10.0.0.128");
        assert_eq!(value["subnets"][1]["broadcast"], "10.0.0.255");
        assert_eq!(value["subnets"][1]["hosts"], 126.0);
    }
}
