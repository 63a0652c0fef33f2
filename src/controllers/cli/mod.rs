pub mod zoom_sequence;
