//! Selection state of the forecast and dataset pages.
//!
//! Each page owns one of these objects and hands it to the orchestrator, so
//! no selection lives in shared mutable globals.

use common::{DatasetSlot, DatasetType, ForecastType, YesNo};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::slot::{SlotState, UploadHandle};
use crate::ui::DATASET_FILES_REQUIRED;

/// Forecast type chosen in the forecast page's dropdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSelection {
    selected: Option<ForecastType>,
}

impl ForecastSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select by dropdown text. Unknown values leave the selection untouched.
    pub fn select(&mut self, value: &str) -> Result<ForecastType> {
        let forecast_type: ForecastType = value.parse()?;
        self.set(forecast_type);
        Ok(forecast_type)
    }

    pub fn set(&mut self, forecast_type: ForecastType) {
        debug!("Forecast type selected: {}", forecast_type);
        self.selected = Some(forecast_type);
    }

    pub fn selected(&self) -> Option<ForecastType> {
        self.selected
    }
}

/// Everything the dataset upload page collects before "save".
#[derive(Debug, Clone, Default)]
pub struct DatasetSelections {
    slots: [SlotState; DatasetSlot::COUNT],
    pub use_existing: bool,
    pub dataset_type: Option<DatasetType>,
}

impl DatasetSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the dataset type by dropdown text.
    pub fn select_dataset_type(&mut self, value: &str) -> Result<DatasetType> {
        let dataset_type: DatasetType = value.parse()?;
        debug!("Dataset type selected: {}", dataset_type);
        self.dataset_type = Some(dataset_type);
        Ok(dataset_type)
    }

    pub fn slot(&self, slot: DatasetSlot) -> &SlotState {
        &self.slots[slot.index()]
    }

    pub fn label(&self, slot: DatasetSlot) -> &str {
        self.slot(slot).label()
    }

    /// Labels of all five slots, in page order.
    pub fn labels(&self) -> Vec<&str> {
        self.slots.iter().map(SlotState::label).collect()
    }

    pub(crate) fn bind(&mut self, slot: DatasetSlot, upload: UploadHandle) {
        self.slots[slot.index()] = SlotState::Selected {
            file_name: upload.file_name().to_string(),
            upload,
        };
    }

    /// Upload handles of every slot holding a file.
    pub fn uploads(&self) -> impl Iterator<Item = &UploadHandle> {
        self.slots.iter().filter_map(SlotState::upload)
    }

    /// Every slot needs a file unless the existing files are reused.
    pub fn validate(&self) -> Result<()> {
        if self.use_existing {
            return Ok(());
        }

        let missing: Vec<DatasetSlot> = DatasetSlot::ALL
            .into_iter()
            .filter(|slot| self.slot(*slot).file_name().is_none())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            debug!("Slots without a file: {:?}", missing);
            Err(ClientError::Validation(DATASET_FILES_REQUIRED.to_string()))
        }
    }

    /// The `file` argument: one file name per slot, `None` for empty slots.
    pub fn file_names(&self) -> Vec<Option<String>> {
        self.slots
            .iter()
            .map(|slot| slot.file_name().map(str::to_string))
            .collect()
    }

    pub fn use_existing_flag(&self) -> YesNo {
        YesNo::from(self.use_existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CommonError;

    #[test]
    fn test_forecast_selection_rejects_unknown_values() {
        let mut selection = ForecastSelection::new();
        selection.select("Quarterly").unwrap();

        let err = selection.select("Weekly").unwrap_err();
        assert!(matches!(
            err,
            ClientError::Selection(CommonError::UnknownForecastType(_))
        ));
        assert_eq!(selection.selected(), Some(ForecastType::Quarterly));
    }

    #[test]
    fn test_empty_selections() {
        let selections = DatasetSelections::new();

        assert_eq!(selections.labels(), vec!["No file selected"; 5]);
        assert_eq!(selections.file_names(), vec![None; 5]);
        assert_eq!(selections.use_existing_flag(), YesNo::No);
        assert!(matches!(selections.validate(), Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_use_existing_satisfies_validation() {
        let mut selections = DatasetSelections::new();
        selections.use_existing = true;

        assert!(selections.validate().is_ok());
        assert_eq!(selections.use_existing_flag(), YesNo::Yes);
    }

    #[test]
    fn test_select_dataset_type() {
        let mut selections = DatasetSelections::new();
        assert_eq!(selections.select_dataset_type("Workforce").unwrap(), DatasetType::Workforce);
        assert!(selections.select_dataset_type("Population").is_err());
        assert_eq!(selections.dataset_type, Some(DatasetType::Workforce));
    }
}
