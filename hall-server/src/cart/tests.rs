use super::*;

#[test]
fn object_entries_render_name_and_items() {
    // encodeURIComponent('[{"name":"Pizza","items":["Cheese","Veg"]}]')
    let raw = "%5B%7B%22name%22%3A%22Pizza%22%2C%22items%22%3A%5B%22Cheese%22%2C%22Veg%22%5D%7D%5D";
    let prefill = decode_cart(raw);

    assert_eq!(prefill.food_items, "Pizza: Cheese, Veg");
    assert_eq!(
        prefill.food_cart,
        serde_json::json!([{"name": "Pizza", "items": ["Cheese", "Veg"]}])
    );
}

#[test]
fn string_entries_become_one_line_each() {
    let raw = "%5B%22Salad%22%2C%22Soup%22%5D"; // ["Salad","Soup"]
    let prefill = decode_cart(raw);

    assert_eq!(prefill.food_items, "Salad\nSoup");
    assert_eq!(prefill.food_cart, serde_json::json!(["Salad", "Soup"]));
}

#[test]
fn mixed_entries_keep_their_order() {
    let raw = urlencoding::encode(r#"["Welcome Drinks",{"name":"Mains","items":["Paneer","Dal"]},42]"#)
        .into_owned();
    let prefill = decode_cart(&raw);

    assert_eq!(prefill.food_items, "Welcome Drinks\nMains: Paneer, Dal\n42");
}

#[test]
fn object_without_items_renders_empty_list() {
    let raw = urlencoding::encode(r#"[{"name":"Starters"}]"#).into_owned();
    let prefill = decode_cart(&raw);

    assert_eq!(prefill.food_items, "Starters: ");
}

#[test]
fn legacy_plain_text_falls_back_to_raw_line() {
    let raw = "Paneer%20Tikka%2C%20Biryani";
    let prefill = decode_cart(raw);

    assert_eq!(prefill.food_items, "Paneer Tikka, Biryani");
    assert_eq!(prefill.food_cart, serde_json::json!([]));
}

#[test]
fn non_array_json_stringifies_with_empty_echo() {
    let prefill = decode_cart("%7B%22a%22%3A1%7D"); // {"a":1}
    assert_eq!(prefill.food_items, r#"{"a":1}"#);
    assert_eq!(prefill.food_cart, serde_json::json!([]));

    // A bare JSON string renders without quotes
    let prefill = decode_cart("%22just%20text%22");
    assert_eq!(prefill.food_items, "just text");
}

#[test]
fn invalid_percent_encoding_keeps_raw_text() {
    // %FF is not valid UTF-8 after decoding
    let raw = "%FF%FE";
    let prefill = decode_cart(raw);

    assert_eq!(prefill.food_items, raw);
    assert_eq!(prefill.food_cart, serde_json::json!([]));
}

#[test]
fn decoding_is_deterministic() {
    let raw = "%5B%7B%22name%22%3A%22Pizza%22%2C%22items%22%3A%5B%22Cheese%22%2C%22Veg%22%5D%7D%5D";
    let a = decode_cart(raw);
    let b = decode_cart(raw);

    assert_eq!(a.food_items, b.food_items);
    assert_eq!(a.food_cart, b.food_cart);
}
