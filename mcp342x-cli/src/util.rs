pub(crate) fn u8_from_hex(value: &str) -> Result<u8, std::num::ParseIntError> {
    let s = if value.to_ascii_lowercase().starts_with("0x") {
        &value[2..]
    } else {
        value
    };
    u8::from_str_radix(s, 16)
}
