pub mod choice;
pub mod input_buffer;
