pub mod form_view;
pub mod notice_view;
pub mod records_view;

pub use form_view::FormView;
pub use notice_view::show_notice;
pub use records_view::RecordsView;
