/// The change-notification capability every model with observable fields
/// provides.
///
/// Generated setters call this once per effective change, after the new
/// value is stored and before any dependent updater runs. Models usually
/// forward to a [`PropertyChangedHub`](crate::observers::PropertyChangedHub).
pub trait NotifyPropertyChanged {
    fn notify_property_changed(&mut self, property: &'static str);
}
