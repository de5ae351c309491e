use crate::spotify::Device;

/// Device picker lifecycle 🔊
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeviceDialog {
    #[default]
    Closed,
    /// Waiting for the device list of request `generation`
    Loading { generation: u64 },
    Ready {
        devices: Vec<Device>,
        selected: Option<usize>,
    },
}

impl DeviceDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, DeviceDialog::Closed)
    }

    /// Opens the dialog with no selection. Returns the generation the
    /// caller must tag its device fetch with.
    pub fn open(&mut self, last_generation: &mut u64) -> u64 {
        *last_generation += 1;
        *self = DeviceDialog::Loading {
            generation: *last_generation,
        };
        *last_generation
    }

    /// Applies a fetch result; ignored unless it answers the pending request.
    pub fn devices_loaded(&mut self, generation: u64, result: Result<Vec<Device>, String>) {
        let pending = matches!(self, DeviceDialog::Loading { generation: g } if *g == generation);
        if !pending {
            tracing::debug!(generation, "dropping stale device list");
            return;
        }
        let devices = result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to list devices");
            Vec::new()
        });
        *self = DeviceDialog::Ready {
            devices,
            selected: None,
        };
    }

    pub fn devices(&self) -> &[Device] {
        match self {
            DeviceDialog::Ready { devices, .. } => devices,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            DeviceDialog::Ready { selected, .. } => *selected,
            _ => None,
        }
    }

    pub fn select(&mut self, index: usize) {
        if let DeviceDialog::Ready { devices, selected } = self {
            if index < devices.len() {
                *selected = Some(index);
            }
        }
    }

    pub fn select_next(&mut self) {
        if let DeviceDialog::Ready { devices, selected } = self {
            if devices.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                None => 0,
                Some(i) => (i + 1).min(devices.len() - 1),
            });
        }
    }

    pub fn select_prev(&mut self) {
        if let DeviceDialog::Ready { devices, selected } = self {
            if devices.is_empty() {
                return;
            }
            *selected = Some(selected.map(|i| i.saturating_sub(1)).unwrap_or(0));
        }
    }

    /// "Transfer Playback" is only enabled with a selection
    pub fn can_confirm(&self) -> bool {
        self.selected().is_some()
    }

    /// Returns the device id to transfer to and closes the dialog.
    /// Index 0 is a real selection; only `None` means nothing is picked.
    pub fn confirm(&mut self) -> Option<String> {
        let DeviceDialog::Ready {
            devices,
            selected: Some(index),
        } = self
        else {
            return None;
        };
        let id = devices
            .get(*index)
            .map(|d| d.id.clone().unwrap_or_default());
        *self = DeviceDialog::Closed;
        id
    }

    pub fn cancel(&mut self) {
        *self = DeviceDialog::Closed;
    }

    /// Popup height in rows: borders, footer and one row per device
    pub fn height(&self) -> u16 {
        4 + self.devices().len() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spotify::DeviceType;

    fn devices() -> Vec<Device> {
        vec![
            Device {
                id: Some("first".into()),
                name: "Laptop".into(),
                device_type: DeviceType::Computer,
                is_active: false,
            },
            Device {
                id: Some("second".into()),
                name: "Kitchen".into(),
                device_type: DeviceType::Speaker,
                is_active: true,
            },
        ]
    }

    fn ready() -> DeviceDialog {
        let mut generation = 0;
        let mut dialog = DeviceDialog::default();
        let g = dialog.open(&mut generation);
        dialog.devices_loaded(g, Ok(devices()));
        dialog
    }

    #[test]
    fn test_open_loads_then_ready() {
        let mut generation = 0;
        let mut dialog = DeviceDialog::default();
        assert!(!dialog.is_open());

        let g = dialog.open(&mut generation);
        assert_eq!(dialog, DeviceDialog::Loading { generation: g });
        assert!(dialog.devices().is_empty());
        assert!(!dialog.can_confirm());

        dialog.devices_loaded(g, Ok(devices()));
        assert_eq!(dialog.devices().len(), 2);
        assert_eq!(dialog.selected(), None);
        assert_eq!(dialog.height(), 6);
    }

    #[test]
    fn test_selecting_first_device_transfers_to_it() {
        let mut dialog = ready();
        dialog.select(0);
        assert!(dialog.can_confirm());
        assert_eq!(dialog.confirm(), Some("first".to_string()));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_confirm_without_selection_is_disabled() {
        let mut dialog = ready();
        assert_eq!(dialog.confirm(), None);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_cancel_closes_without_transfer() {
        let mut dialog = ready();
        dialog.select(1);
        dialog.cancel();
        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn test_reopen_resets_selection_and_drops_stale_results() {
        let mut generation = 0;
        let mut dialog = DeviceDialog::default();
        let stale = dialog.open(&mut generation);
        dialog.cancel();
        let fresh = dialog.open(&mut generation);

        dialog.devices_loaded(stale, Ok(devices()));
        assert_eq!(dialog, DeviceDialog::Loading { generation: fresh });

        dialog.devices_loaded(fresh, Ok(devices()));
        dialog.select(1);
        dialog.open(&mut generation);
        assert_eq!(dialog.selected(), None);
    }

    #[test]
    fn test_failed_fetch_yields_empty_ready_dialog() {
        let mut generation = 0;
        let mut dialog = DeviceDialog::default();
        let g = dialog.open(&mut generation);
        dialog.devices_loaded(g, Err("boom".into()));
        assert!(matches!(dialog, DeviceDialog::Ready { ref devices, .. } if devices.is_empty()));
        dialog.select_next();
        assert!(!dialog.can_confirm());
    }

    #[test]
    fn test_keyboard_selection_and_bounds() {
        let mut dialog = ready();
        dialog.select_prev();
        assert_eq!(dialog.selected(), Some(0));
        dialog.select_next();
        dialog.select_next();
        assert_eq!(dialog.selected(), Some(1));
        dialog.select(7);
        assert_eq!(dialog.selected(), Some(1));
    }
}
