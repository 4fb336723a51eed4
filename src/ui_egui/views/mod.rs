pub mod change_list;
pub mod chart_view;
