//! Scanner catalog
//!
//! Fixed list of tools an entry can originate from. The name is recorded in
//! report metadata and spliced into the report filename.

/// Supported scanners, in menu order
pub const SCANNERS: [&str; 8] = [
    "SonarCloud",
    "Qualys",
    "AWS Inspector",
    "Carbon Black",
    "Snyk",
    "BugBounty",
    "DAST",
    "Trivy",
];

/// Render the numbered selection menu
pub fn menu() -> String {
    let mut out = String::from("Available scanners:\n");
    for (idx, scanner) in SCANNERS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, scanner));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_scanner() {
        let menu = menu();
        for (idx, scanner) in SCANNERS.iter().enumerate() {
            assert!(menu.contains(&format!("{}. {}", idx + 1, scanner)));
        }
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(SCANNERS[0], "SonarCloud");
        assert_eq!(SCANNERS[7], "Trivy");
    }
}
