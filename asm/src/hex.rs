/// One word per line as 4 uppercase hex digits, then a blank line.
pub fn to_hex(words: &[u16]) -> String {
    let mut out: String = words.iter().map(|word| format!("{:04X}\n", word)).collect();
    out.push('\n');
    out
}

#[test]
fn test() {
    assert_eq!(to_hex(&[]), "\n");
    assert_eq!(to_hex(&[0x7005, 0x000A, 0xE000]), "7005\n000A\nE000\n\n");
}
