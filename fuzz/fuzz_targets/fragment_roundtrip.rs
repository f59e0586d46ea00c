use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            if let Ok(index) = searchdata::decode_fragment(text) {
                let canonical = searchdata::encode_fragment(&index);
                let reparsed =
                    searchdata::decode_fragment(&canonical).expect("canonical form must decode");
                assert_eq!(reparsed, index);
            }
        });
    }
}
