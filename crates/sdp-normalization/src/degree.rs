//! Degree names offered by the form and the tokens the model was trained on.

use crate::error::MappingBuildError;
use crate::mapping::CategoryMapping;

/// `(display name, training token)` in the order the form lists them.
pub const DEGREE_TABLE: &[(&str, &str)] = &[
    ("Bachelor of Pharmacy", "B.Pharm"),
    ("Bachelor of Science", "BSc"),
    ("Bachelor of Arts", "BA"),
    ("Bachelor of Computer Applications", "BCA"),
    ("Master of Technology", "M.Tech"),
    ("PhD", "PhD"),
    ("Bachelor of Education", "B.Ed"),
    ("Bachelor of Laws", "LLB"),
    ("Bachelor of Engineering", "BE"),
    ("Master of Education", "M.Ed"),
    ("Master of Science", "MSc"),
    ("Bachelor of Hotel Management", "BHM"),
    ("Master of Pharmacy", "M.Pharm"),
    ("Master of Computer Applications", "MCA"),
    ("Master of Arts", "MA"),
    ("Bachelor of Commerce", "B.Com"),
    ("Doctor of Medicine", "MD"),
    ("Master of Business Administration", "MBA"),
    ("Bachelor of Medicine, Bachelor of Surgery", "MBBS"),
    ("Master of Commerce", "M.Com"),
    ("Bachelor of Architecture", "B.Arch"),
    ("Master of Laws", "LLM"),
    ("Bachelor of Technology", "B.Tech"),
    ("Bachelor of Business Administration", "BBA"),
    ("Master of Engineering", "ME"),
    ("Master of Hotel Management", "MHM"),
];

/// Build the degree mapping from [`DEGREE_TABLE`].
pub fn degree_mapping() -> Result<CategoryMapping, MappingBuildError> {
    CategoryMapping::new("degree", DEGREE_TABLE.iter().copied())
}
