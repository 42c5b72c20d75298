use js_sys::{Float32Array, Object, Reflect, Uint32Array, Uint8Array};
use mapcolor::{Frame, Vec2};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_u32(slice: &[u32]) -> Uint32Array {
    let arr = Uint32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_f32(slice: &[f32]) -> Float32Array {
    let arr = Float32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_u8(slice: &[u8]) -> Uint8Array {
    let arr = Uint8Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}

/// Flat, typed-array form of a frame for canvas renderers.
///
/// `offsets[i]..offsets[i+1]` indexes the points (in xy pairs) of region
/// `ids[i]`. `colors` holds the palette slot per region, 255 for none.
/// `labels` holds an xy pair per region, NaN when no label is drawn.
pub struct FrameArrays {
    pub ids: Vec<u32>,
    pub offsets: Vec<u32>,
    pub points: Vec<f32>,
    pub fills: Vec<u8>,
    pub colors: Vec<u8>,
    pub labels: Vec<f32>,
}

impl FrameArrays {
    pub fn from_frame(frame: &Frame) -> Self {
        let n = frame.regions.len();
        let total: usize = frame.regions.iter().map(|r| r.points.len()).sum();
        let mut out = FrameArrays {
            ids: Vec::with_capacity(n),
            offsets: Vec::with_capacity(n + 1),
            points: Vec::with_capacity(total * 2),
            fills: Vec::with_capacity(n * 4),
            colors: Vec::with_capacity(n),
            labels: Vec::with_capacity(n * 2),
        };
        out.offsets.push(0);
        for r in &frame.regions {
            out.ids.push(r.id);
            for p in &r.points {
                out.points.push(p.x as f32);
                out.points.push(p.y as f32);
            }
            out.offsets.push((out.points.len() / 2) as u32);
            out.fills.extend_from_slice(&r.fill.to_array());
            out.colors.push(r.color.unwrap_or(u8::MAX));
            let l = r.label.unwrap_or(Vec2::new(f64::NAN, f64::NAN));
            out.labels.push(l.x as f32);
            out.labels.push(l.y as f32);
        }
        out
    }

    pub fn to_js(&self, frame: &Frame) -> JsValue {
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&self.ids).into());
        set_kv(&obj, "offsets", &arr_u32(&self.offsets).into());
        set_kv(&obj, "points", &arr_f32(&self.points).into());
        set_kv(&obj, "fills", &arr_u8(&self.fills).into());
        set_kv(&obj, "colors", &arr_u8(&self.colors).into());
        set_kv(&obj, "labels", &arr_f32(&self.labels).into());
        set_kv(&obj, "border_rgba", &arr_u8(&frame.border.to_array()).into());
        set_kv(&obj, "border_width", &JsValue::from_f64(frame.border_width));
        set_kv(&obj, "zoom", &JsValue::from_f64(frame.zoom));
        set_kv(&obj, "complete", &JsValue::from_bool(frame.complete));
        set_kv(&obj, "valid", &JsValue::from_bool(frame.valid));
        set_kv(&obj, "elapsed", &JsValue::from_f64(frame.elapsed));
        obj.into()
    }
}
