use js_sys::Object;
use mapcolor::{ConfigError, LevelError, SnapshotError};
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

fn param_obj(param: &str) -> Object {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    d
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    err("non_finite", format!("parameter '{}' must be finite", param), Some(param_obj(param).into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = param_obj(param);
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", format!("no region with id {}", id), Some(d.into()))
}

#[inline]
pub fn no_level() -> JsValue { err("no_level", "no level is loaded", None) }

pub fn level(e: &LevelError) -> JsValue {
    let data = match e {
        LevelError::CapsExceeded { what, limit } => {
            let d = new_obj();
            set_kv(&d, "what", &JsValue::from_str(what));
            set_kv(&d, "limit", &JsValue::from_f64(*limit as f64));
            Some(d.into())
        }
        LevelError::OutOfBounds { region } | LevelError::DuplicateId(region)
        | LevelError::DegeneratePolygon { region, .. } => {
            let d = new_obj();
            set_kv(&d, "region", &JsValue::from_f64(*region as f64));
            Some(d.into())
        }
        LevelError::Parse(_) => None,
    };
    err(e.code(), e.to_string(), data)
}

pub fn snapshot(e: &SnapshotError) -> JsValue {
    let data = match e {
        SnapshotError::LevelMismatch { expected, found } => {
            let d = new_obj();
            set_kv(&d, "expected", &JsValue::from_str(expected));
            set_kv(&d, "found", &JsValue::from_str(found));
            Some(d.into())
        }
        _ => None,
    };
    err(e.code(), e.to_string(), data)
}

pub fn config(e: &ConfigError) -> JsValue {
    let data = match e {
        ConfigError::OutOfRange { param, got } => {
            let d = param_obj(param);
            set_kv(&d, "got", &JsValue::from_f64(*got));
            Some(d.into())
        }
        ConfigError::Parse(_) => None,
    };
    err(e.code(), e.to_string(), data)
}
