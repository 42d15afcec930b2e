//! Curated government policies relevant to street vendors.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub title: &'static str,
    pub summary: &'static str,
    pub source: &'static str,
    pub region: &'static str,
}

pub static STREET_VENDOR_POLICIES: &[Policy] = &[
    Policy {
        title: "Street Vendors (Protection of Livelihood and Regulation of Street Vending) Act, 2014",
        summary: "Defines rights of urban street vendors, mandates Town Vending Committees (TVCs), \
                  protects from arbitrary evictions, and outlines vending certificates.",
        source: "https://legislative.gov.in/actsofparliamentfromtheyear/street-vendors-protection-livelihood-and-regulation-street-vending",
        region: "India",
    },
    Policy {
        title: "Model Street Vendor Policy (MoHUA)",
        summary: "Guidelines from Ministry of Housing and Urban Affairs to operationalize the Act, \
                  including vending zones, grievance redressal, and inclusive planning.",
        source: "https://mohua.gov.in/",
        region: "India",
    },
    Policy {
        title: "PM SVANidhi Micro-Credit Scheme",
        summary: "Collateral-free working capital loans for street vendors with interest subsidy \
                  and digital transactions incentives.",
        source: "https://pmsvanidhi.mohua.gov.in/",
        region: "India",
    },
    Policy {
        title: "Urban Street Vendors Scheme (State-specific)",
        summary: "State/ULB-level implementations for vending certificates, designated vending zones, \
                  and social security linkages aligned to the 2014 Act.",
        source: "https://mohua.gov.in/cms/street-vendors.aspx",
        region: "India",
    },
];

/// Policies for `region` (case-insensitive). `None` or an empty region returns every policy.
pub fn street_vendor_policies(region: Option<&str>) -> Vec<&'static Policy> {
    match region.filter(|r| !r.is_empty()) {
        Some(region) => STREET_VENDOR_POLICIES
            .iter()
            .filter(|p| p.region.eq_ignore_ascii_case(region))
            .collect(),
        None => STREET_VENDOR_POLICIES.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_all_policies_without_region() {
        assert_eq!(street_vendor_policies(None).len(), 4);
        assert_eq!(street_vendor_policies(Some("")).len(), 4);
    }

    #[test]
    fn should_filter_region_case_insensitively() {
        assert_eq!(street_vendor_policies(Some("india")).len(), 4);
        assert_eq!(street_vendor_policies(Some("INDIA")).len(), 4);
    }

    #[test]
    fn should_return_nothing_for_unknown_region() {
        assert!(street_vendor_policies(Some("Kenya")).is_empty());
    }
}
