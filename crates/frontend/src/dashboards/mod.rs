pub mod d400_return_stats;

pub use d400_return_stats::ui::ReturnStatsDashboard;
