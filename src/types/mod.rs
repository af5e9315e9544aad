pub mod iv_frame;
pub mod parameter_codes;
