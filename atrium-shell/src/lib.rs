//! Atrium Studio - desktop shell with a collapsible navigation sidebar.

pub mod widgets;
