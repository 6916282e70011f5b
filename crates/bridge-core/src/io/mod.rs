pub mod hand_parser;
