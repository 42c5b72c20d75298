#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use mapcolor_wasm::MapBoard;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PAIR: &str = r#"{
    "id": "pair",
    "name": "Pair",
    "regions": [
        {"id": 1, "name": "West", "points": [[0,0],[10,0],[10,10],[0,10]], "neighbors": [2]},
        {"id": 2, "name": "East", "points": [[10,0],[20,0],[20,10],[10,10]], "neighbors": [1]}
    ]
}"#;

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn value(v: &JsValue) -> JsValue {
    Reflect::get(v, &JsValue::from_str("value")).unwrap()
}

fn loaded() -> MapBoard {
    let mut b = MapBoard::compact();
    assert!(b.load_level_json(PAIR, 400.0, 300.0));
    b
}

#[wasm_bindgen_test]
fn level_errors_are_typed() {
    let mut b = MapBoard::new();
    assert!(is_err(&b.load_level_json_res("{", 100.0, 100.0), "parse"));
    let dup = r#"{"id":"d","name":"","regions":[
        {"id":1,"points":[[0,0],[1,0],[1,1]],"neighbors":[]},
        {"id":1,"points":[[0,0],[1,0],[1,1]],"neighbors":[]}]}"#;
    assert!(is_err(&b.load_level_json_res(dup, 100.0, 100.0), "invalid_structure"));
    assert!(is_err(&b.load_level_json_res(PAIR, f64::NAN, 100.0), "non_finite"));
    assert_eq!(b.level_id(), None);
    assert!(is_err(&b.click_res(1.0, 1.0), "no_level"));
    assert!(is_err(&b.restore_json_res("{}"), "no_level"));
}

#[wasm_bindgen_test]
fn play_to_a_solution() {
    let mut b = loaded();
    assert_eq!(b.region_count(), 2);
    assert!(b.select_color(2));
    let r = b.color_region_res(1);
    assert_eq!(value(&r).as_bool(), Some(true));
    assert!(is_err(&b.color_region_res(99), "invalid_id"));
    assert!(b.select_color(3));
    b.color_region_res(2);
    assert!(b.is_complete() && b.is_valid() && b.is_solved());
    assert_eq!(b.region_color(1), 2);

    assert_eq!(b.undo(), Some(2));
    assert_eq!(b.region_color(2), -1);
    assert!(!b.is_solved());
    b.reset();
    assert!(!b.can_undo());
}

#[wasm_bindgen_test]
fn brush_and_zoom_validation() {
    let mut b = loaded();
    assert!(is_err(&b.select_color_res(4), "out_of_range"));
    b.select_eraser();
    assert!(b.eraser_mode());
    assert_eq!(b.selected_color(), -1);

    let z = b.zoom();
    assert!(is_err(&b.zoom_by_res(0.0, None, None), "out_of_range"));
    assert!(is_err(&b.zoom_by_res(f64::INFINITY, None, None), "non_finite"));
    assert_eq!(b.zoom(), z);
    assert!(is_err(&b.resize_res(f64::NAN, 300.0), "non_finite"));
    assert!(is_err(&b.resize_res(400.0, -5.0), "out_of_range"));
    assert_eq!(b.zoom(), z);
    assert!(b.zoom_out(Some(10.0), Some(10.0)));
    b.reset_view();
    assert_eq!(b.zoom(), z);
}

#[wasm_bindgen_test]
fn clicks_hit_regions_on_screen() {
    let mut b = loaded();
    let mut hit = None;
    for x in (0..400).step_by(5) {
        if let Some(id) = b.pick(x as f64, 150.0) {
            hit = Some((x as f64, id));
            break;
        }
    }
    let (x, id) = hit.expect("a region under the middle row");
    assert_eq!(b.click(x, 150.0), Some(id));
    assert_eq!(b.region_color(id), 0);
    assert_eq!(value(&b.click_res(1.0, 1.0)), JsValue::NULL);
}

#[wasm_bindgen_test]
fn snapshot_round_trip() {
    let mut b = loaded();
    b.select_color(1);
    b.color_region_res(2);
    let json = b.snapshot_json().unwrap();

    let mut c = loaded();
    c.select_color(3);
    c.color_region_res(1);
    let too_long = json.replace(
        "\"undo_history\":[",
        &format!("\"undo_history\":[{}", "{\"region_id\":1,\"previous_color\":null},".repeat(10_001)),
    );
    assert!(is_err(&c.restore_json_res(&too_long), "caps_exceeded"));
    assert_eq!(c.region_color(1), 3);
    assert_eq!(value(&c.restore_json_res(&json)).as_bool(), Some(true));
    assert_eq!(c.region_color(1), -1);
    assert_eq!(c.region_color(2), 1);
    assert_eq!(c.selected_color(), 1);
    assert!(is_err(&c.restore_json_res("not json"), "parse"));
    let other = json.replace("\"pair\"", "\"other\"");
    assert!(is_err(&c.restore_json_res(&other), "level_mismatch"));
}

#[wasm_bindgen_test]
fn frame_arrays_and_palette() {
    let mut b = loaded();
    let data = b.get_frame_data();
    let ids = Reflect::get(&data, &JsValue::from_str("ids")).unwrap();
    assert_eq!(js_sys::Uint32Array::from(ids).to_vec(), vec![1, 2]);
    let offsets = Reflect::get(&data, &JsValue::from_str("offsets")).unwrap();
    assert_eq!(js_sys::Uint32Array::from(offsets).to_vec(), vec![0, 4, 8]);

    assert!(is_err(&b.set_palette_color_res(7, 0, 0, 0, 255), "out_of_range"));
    b.set_palette_color_res(0, 9, 8, 7, 255);
    assert_eq!(&b.palette_rgba()[..4], &[9, 8, 7, 255]);
    b.reset_palette();
    assert_ne!(&b.palette_rgba()[..4], &[9, 8, 7, 255]);

    assert!(is_err(&b.set_config_res(r#"{"view":{"min_zoom":-1}}"#), "out_of_range"));
    assert_eq!(b.level_id().as_deref(), Some("pair"));
    assert_eq!(value(&b.handle_event_res(r#"{"type":"zoom_in"}"#)).as_bool(), Some(true));
    assert!(is_err(&b.handle_event_res(r#"{"type":"warp"}"#), "parse"));
}
