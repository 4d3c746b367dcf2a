pub(crate) mod spotlight_view;
pub(crate) mod transition;
