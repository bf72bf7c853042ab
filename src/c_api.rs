// C FFI surface for host shells (keyboard apps, web backends).
// Uses raw pointers and catch_unwind for stability.
use crate::core::types::{ConversionOptions, Direction, LanguageCode, UnknownTokenMode};
use crate::dictionary::DictionaryEditor;
use crate::error::DictionaryError;
use crate::TranslitEngine;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;

static mut TRANSLIT_ENGINE: *mut TranslitEngine = ptr::null_mut();

/// Mutation result codes reported across the FFI boundary.
const STATUS_OK: i32 = 0;
const STATUS_VALIDATION: i32 = 1;
const STATUS_DUPLICATE: i32 = 2;
const STATUS_NOT_FOUND: i32 = 3;
const STATUS_IO: i32 = 4;
const STATUS_NO_ENGINE: i32 = -1;

fn get_dictionary_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .expect("Could not find a valid home/data directory");
    path.push("myanglish-smart-translit");
    path.push("user_dictionary.bin");
    path
}

fn direction_from_u32(raw: u32) -> Direction {
    match raw {
        1 => Direction::BurmeseToMyanglish,
        _ => Direction::MyanglishToBurmese,
    }
}

fn status_code(result: Result<(), DictionaryError>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(DictionaryError::Validation(_)) => STATUS_VALIDATION,
        Err(DictionaryError::Duplicate { .. }) => STATUS_DUPLICATE,
        Err(DictionaryError::NotFound { .. }) => STATUS_NOT_FOUND,
        Err(DictionaryError::Io(_)) => STATUS_IO,
    }
}

#[no_mangle]
pub extern "C" fn translit_engine_init() {
    let result = catch_unwind(|| unsafe {
        if !TRANSLIT_ENGINE.is_null() {
            return;
        }
        let dict_path = get_dictionary_path();
        if let Some(parent) = dict_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let engine = TranslitEngine::from_file_or_new(dict_path.to_str().unwrap_or(""));
        TRANSLIT_ENGINE = Box::into_raw(Box::new(engine));
        eprintln!("[Rust] Myanglish translit engine initialized successfully.");
    });
    if result.is_err() {
        eprintln!("[Rust FATAL] A panic occurred during engine initialization.");
        unsafe {
            TRANSLIT_ENGINE = ptr::null_mut();
        }
    }
}

#[no_mangle]
pub extern "C" fn translit_engine_destroy() {
    unsafe {
        if TRANSLIT_ENGINE.is_null() {
            return;
        }
        let engine = Box::from_raw(TRANSLIT_ENGINE);
        if let Err(e) = engine.save_dictionary() {
            eprintln!("[Rust ERR] Failed to save dictionary: {}", e);
        } else {
            eprintln!("[Rust] Dictionary saved successfully.");
        }
        TRANSLIT_ENGINE = ptr::null_mut();
    }
}

unsafe fn get_engine<'a>() -> Option<&'a TranslitEngine> {
    TRANSLIT_ENGINE.as_ref()
}

unsafe fn cstr_or_empty<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn convert_ffi(text: *const c_char, mode: u32, target: LanguageCode) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let text = cstr_or_empty(text);
        let options = ConversionOptions {
            unknown_token_mode: UnknownTokenMode::from_u32(mode),
        };
        match get_engine() {
            Some(engine) => engine.convert(text, None, target, &options).text,
            None => String::new(),
        }
    }));
    let output = result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in convert.");
        String::new()
    });
    CString::new(output).unwrap_or_default().into_raw()
}

#[no_mangle]
pub extern "C" fn translit_convert_to_burmese(text: *const c_char, mode: u32) -> *mut c_char {
    convert_ffi(text, mode, LanguageCode::Burmese)
}

#[no_mangle]
pub extern "C" fn translit_convert_to_myanglish(text: *const c_char, mode: u32) -> *mut c_char {
    convert_ffi(text, mode, LanguageCode::Myanglish)
}

#[no_mangle]
pub extern "C" fn translit_detect_language(text: *const c_char) -> *mut c_char {
    let code = catch_unwind(AssertUnwindSafe(|| unsafe {
        let text = cstr_or_empty(text);
        match get_engine() {
            Some(engine) => engine.detect_language(text).as_str(),
            None => LanguageCode::Myanglish.as_str(),
        }
    }))
    .unwrap_or(LanguageCode::Myanglish.as_str());
    CString::new(code).unwrap_or_default().into_raw()
}

#[no_mangle]
pub extern "C" fn translit_add_dictionary_entry(
    word: *const c_char,
    translation: *const c_char,
    direction: u32,
) -> i32 {
    catch_unwind(AssertUnwindSafe(|| unsafe {
        let word = cstr_or_empty(word);
        let translation = cstr_or_empty(translation);
        match get_engine() {
            Some(engine) => status_code(DictionaryEditor.add_entry(
                &engine.dictionary,
                word,
                translation,
                direction_from_u32(direction),
            )),
            None => STATUS_NO_ENGINE,
        }
    }))
    .unwrap_or(STATUS_NO_ENGINE)
}

#[no_mangle]
pub extern "C" fn translit_edit_dictionary_entry(
    word: *const c_char,
    translation: *const c_char,
    direction: u32,
) -> i32 {
    catch_unwind(AssertUnwindSafe(|| unsafe {
        let word = cstr_or_empty(word);
        let translation = cstr_or_empty(translation);
        match get_engine() {
            Some(engine) => status_code(DictionaryEditor.edit_entry(
                &engine.dictionary,
                word,
                translation,
                direction_from_u32(direction),
            )),
            None => STATUS_NO_ENGINE,
        }
    }))
    .unwrap_or(STATUS_NO_ENGINE)
}

#[no_mangle]
pub extern "C" fn translit_list_dictionary_entries(direction: u32) -> *mut c_char {
    let json = catch_unwind(AssertUnwindSafe(|| unsafe {
        match get_engine() {
            Some(engine) => {
                let entries = engine.dictionary.list(direction_from_u32(direction));
                serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
            }
            None => "[]".to_string(),
        }
    }))
    .unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in list_dictionary_entries.");
        "[]".to_string()
    });
    CString::new(json).unwrap_or_default().into_raw()
}

#[no_mangle]
pub extern "C" fn translit_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
