//! Category vocabulary
//!
//! Each record kind owns a fixed vocabulary of category keys with
//! human-readable labels. A default catalog is bundled; a YAML file in the
//! config directory may replace it. The table is validated once at load time
//! so the aggregators never have to second-guess a key.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::record::RecordKind;
use crate::error::{TallyError, TallyResult};

/// Lookup table mapping (kind, category key) to a display label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCatalog {
    income: BTreeMap<String, String>,
    fixed_expense: BTreeMap<String, String>,
    variable_expense: BTreeMap<String, String>,
    savings: BTreeMap<String, String>,
    investment: BTreeMap<String, String>,
}

impl CategoryCatalog {
    /// Load a catalog from a YAML file, validating it
    pub fn load(path: &Path) -> TallyResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TallyError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let catalog: Self = serde_yaml::from_str(&contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog file if present, otherwise the bundled default
    pub fn load_or_default(path: &Path) -> TallyResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the catalog to a YAML file
    pub fn save(&self, path: &Path) -> TallyResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)
            .map_err(|e| TallyError::Config(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(())
    }

    /// The vocabulary for a kind
    pub fn categories(&self, kind: RecordKind) -> &BTreeMap<String, String> {
        match kind {
            RecordKind::Income => &self.income,
            RecordKind::FixedExpense => &self.fixed_expense,
            RecordKind::VariableExpense => &self.variable_expense,
            RecordKind::Savings => &self.savings,
            RecordKind::Investment => &self.investment,
        }
    }

    /// Check whether a category key belongs to a kind's vocabulary
    pub fn contains(&self, kind: RecordKind, category: &str) -> bool {
        self.categories(kind).contains_key(category)
    }

    /// Resolve a display label; unknown keys fall back to the raw key
    pub fn label(&self, kind: RecordKind, category: &str) -> String {
        self.categories(kind)
            .get(category)
            .cloned()
            .unwrap_or_else(|| category.to_string())
    }

    /// Validate the catalog: every kind must have at least one entry, and
    /// keys/labels must be non-empty
    pub fn validate(&self) -> TallyResult<()> {
        for kind in RecordKind::all() {
            let categories = self.categories(*kind);
            if categories.is_empty() {
                return Err(TallyError::Catalog(format!(
                    "No categories defined for kind '{}'",
                    kind
                )));
            }
            for (key, label) in categories {
                if key.trim().is_empty() {
                    return Err(TallyError::Catalog(format!(
                        "Empty category key for kind '{}'",
                        kind
                    )));
                }
                if label.trim().is_empty() {
                    return Err(TallyError::Catalog(format!(
                        "Empty label for category '{}' of kind '{}'",
                        key, kind
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        }

        Self {
            income: table(&[
                ("salary", "Salary"),
                ("bonus", "Bonus"),
                ("freelance", "Freelance"),
                ("interest", "Interest"),
                ("gift", "Gift"),
                ("other-income", "Other Income"),
            ]),
            fixed_expense: table(&[
                ("rent", "Rent/Mortgage"),
                ("utilities", "Utilities"),
                ("insurance", "Insurance"),
                ("internet", "Internet"),
                ("phone", "Phone"),
                ("subscriptions", "Subscriptions"),
                ("loan-payment", "Loan Payment"),
            ]),
            variable_expense: table(&[
                ("groceries", "Groceries"),
                ("dining-out", "Dining Out"),
                ("transport", "Transportation"),
                ("entertainment", "Entertainment"),
                ("shopping", "Shopping"),
                ("health", "Health"),
                ("travel", "Travel"),
                ("other-expense", "Other"),
            ]),
            savings: table(&[
                ("emergency-fund", "Emergency Fund"),
                ("vacation-fund", "Vacation Fund"),
                ("general-savings", "General Savings"),
            ]),
            investment: table(&[
                ("stocks", "Stocks"),
                ("bonds", "Bonds"),
                ("retirement", "Retirement"),
                ("crypto", "Crypto"),
            ]),
        }
    }
}
