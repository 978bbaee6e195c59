pub mod d400_return_stats;
