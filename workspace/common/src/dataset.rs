use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// Kind of dataset being replaced on the dataset upload page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetType {
    #[serde(rename = "GDP")]
    Gdp,
    #[serde(rename = "Workforce")]
    Workforce,
    #[serde(rename = "Annual Growth")]
    AnnualGrowth,
    #[serde(rename = "Quarterly Growth")]
    QuarterlyGrowth,
}

impl DatasetType {
    pub const ALL: [DatasetType; 4] = [
        DatasetType::Gdp,
        DatasetType::Workforce,
        DatasetType::AnnualGrowth,
        DatasetType::QuarterlyGrowth,
    ];

    /// Dropdown label, which is also the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            DatasetType::Gdp => "GDP",
            DatasetType::Workforce => "Workforce",
            DatasetType::AnnualGrowth => "Annual Growth",
            DatasetType::QuarterlyGrowth => "Quarterly Growth",
        }
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DatasetType {
    type Err = CommonError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Accept both the label and a compact form ("annual-growth", "AnnualGrowth").
        let normalized: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        DatasetType::ALL
            .into_iter()
            .find(|candidate| {
                candidate
                    .label()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .eq_ignore_ascii_case(&normalized)
            })
            .ok_or_else(|| CommonError::UnknownDatasetType(value.to_string()))
    }
}

/// One of the five upload targets on the dataset upload page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetSlot {
    Gdp,
    Workforce,
    AnnualGrowth,
    QuarterlyGrowth,
    General,
}

impl DatasetSlot {
    pub const COUNT: usize = 5;

    pub const ALL: [DatasetSlot; DatasetSlot::COUNT] = [
        DatasetSlot::Gdp,
        DatasetSlot::Workforce,
        DatasetSlot::AnnualGrowth,
        DatasetSlot::QuarterlyGrowth,
        DatasetSlot::General,
    ];

    pub fn from_index(index: usize) -> crate::error::Result<Self> {
        DatasetSlot::ALL
            .get(index)
            .copied()
            .ok_or(CommonError::UnknownSlot(index))
    }

    pub fn index(&self) -> usize {
        match self {
            DatasetSlot::Gdp => 0,
            DatasetSlot::Workforce => 1,
            DatasetSlot::AnnualGrowth => 2,
            DatasetSlot::QuarterlyGrowth => 3,
            DatasetSlot::General => 4,
        }
    }

    /// `attached_to_field` tag sent with the slot's best-effort upload.
    ///
    /// The first slot uses the page's plain `file` tag.
    pub fn field_tag(&self) -> &'static str {
        match self {
            DatasetSlot::Gdp => "file",
            DatasetSlot::Workforce => "workforce_dataset",
            DatasetSlot::AnnualGrowth => "annual_growth_rates_dataset",
            DatasetSlot::QuarterlyGrowth => "quarterly_growth_rates_dataset",
            DatasetSlot::General => "general_dataset",
        }
    }
}

/// The "Yes"/"No" encoding of the shared use-existing checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        value == YesNo::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_type_labels() {
        assert_eq!(serde_json::to_value(DatasetType::Workforce).unwrap(), "Workforce");
        assert_eq!(serde_json::to_value(DatasetType::Gdp).unwrap(), "GDP");
        assert_eq!(
            serde_json::to_value(DatasetType::QuarterlyGrowth).unwrap(),
            "Quarterly Growth"
        );
    }

    #[test]
    fn test_parse_dataset_type() {
        assert_eq!("GDP".parse::<DatasetType>().unwrap(), DatasetType::Gdp);
        assert_eq!("annual-growth".parse::<DatasetType>().unwrap(), DatasetType::AnnualGrowth);
        assert_eq!("Quarterly Growth".parse::<DatasetType>().unwrap(), DatasetType::QuarterlyGrowth);
        assert!("Inflation".parse::<DatasetType>().is_err());
    }

    #[test]
    fn test_slot_indices_round_trip() {
        for (index, slot) in DatasetSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), index);
            assert_eq!(DatasetSlot::from_index(index).unwrap(), *slot);
        }
        assert_eq!(DatasetSlot::from_index(5), Err(CommonError::UnknownSlot(5)));
    }

    #[test]
    fn test_field_tags() {
        assert_eq!(DatasetSlot::Gdp.field_tag(), "file");
        assert_eq!(DatasetSlot::AnnualGrowth.field_tag(), "annual_growth_rates_dataset");
        assert_eq!(DatasetSlot::General.field_tag(), "general_dataset");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(YesNo::from(true), YesNo::Yes);
        assert_eq!(serde_json::to_value(YesNo::No).unwrap(), "No");
        assert!(bool::from(YesNo::Yes));
    }
}
