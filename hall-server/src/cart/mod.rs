//! 购物车解码
//!
//! 菜单页 "Proceed to Book" 通过 `?cart=...` 把已选菜品带进预订表单。
//! 参数值是 URL 编码的 JSON (旧版前端是裸文本)，这里把它解码成
//! 两种形态：textarea 用的多行摘要 + 客户端重绘用的结构化回显。
//!
//! 解码是纯函数，任何失败都降级为尽力而为的文本，绝不向上抛错。

use serde_json::Value;
use shared::client::BookingPrefill;

#[cfg(test)]
mod tests;

/// Decode a raw `cart` query value into form prefill data.
///
/// Fallback chain, each step total:
/// 1. percent-decode; on invalid UTF-8 the raw text becomes the
///    one-line summary and the echo stays empty
/// 2. parse as JSON; a non-JSON value (legacy format) becomes the
///    one-line summary as-is
/// 3. a JSON array yields one summary line per entry; any other JSON
///    value is stringified into a single line with an empty echo
///
/// Deterministic: the same payload always produces the same result.
pub fn decode_cart(raw: &str) -> BookingPrefill {
    let decoded = match urlencoding::decode(raw) {
        Ok(d) => d.into_owned(),
        Err(_) => {
            return BookingPrefill {
                food_items: raw.to_string(),
                food_cart: Value::Array(Vec::new()),
            };
        }
    };

    match serde_json::from_str::<Value>(&decoded) {
        Ok(Value::Array(entries)) => {
            let lines: Vec<String> = entries.iter().map(summary_line).collect();
            BookingPrefill {
                food_items: lines.join("\n"),
                food_cart: Value::Array(entries),
            }
        }
        Ok(other) => BookingPrefill {
            food_items: display(&other),
            food_cart: Value::Array(Vec::new()),
        },
        Err(_) => BookingPrefill {
            // 旧版前端发的是裸文本，不是 JSON
            food_items: decoded,
            food_cart: Value::Array(Vec::new()),
        },
    }
}

/// One summary line per cart entry.
///
/// Strings pass through verbatim; `{name, items}` objects render as
/// `"name: item1, item2"`; everything else falls back to its JSON form.
fn summary_line(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let name = map
                .get("name")
                .map(display)
                .unwrap_or_else(|| "null".to_string());
            let items = map
                .get("items")
                .and_then(Value::as_array)
                .map(|items| {
                    items.iter().map(display).collect::<Vec<_>>().join(", ")
                })
                .unwrap_or_default();
            format!("{}: {}", name, items)
        }
        other => other.to_string(),
    }
}

/// String values render without quotes, everything else as JSON
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
