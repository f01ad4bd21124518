#![cfg(all(target_arch = "wasm32", feature = "web"))]

use drop_uploader::{bind, BindError, Config, ZoneState};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::{
    window, DataTransfer, Document, DragEvent, DragEventInit, Element, Event, File,
    HtmlInputElement,
};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const FORM: &str = r#"
    <div id="dropzone">Drop here</div>
    <input type="file" id="sessionFile" name="sessionFile">
    <p id="file-name"></p>
    <div id="elsewhere"></div>
"#;

fn document() -> Document {
    window().unwrap().document().unwrap()
}

fn mount(markup: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(markup);
    document
}

fn element(id: &str) -> Element {
    document().get_element_by_id(id).unwrap()
}

fn input() -> HtmlInputElement {
    element("sessionFile").dyn_into().unwrap()
}

fn input_names() -> Vec<String> {
    let files = input().files().unwrap();
    (0..files.length())
        .map(|i| files.item(i).unwrap().name())
        .collect()
}

fn label() -> Option<String> {
    element("file-name").text_content()
}

fn highlighted() -> bool {
    element("dropzone").class_list().contains("bg-light")
}

fn transfer(names: &[&str]) -> DataTransfer {
    let data = DataTransfer::new().unwrap();
    for name in names {
        let bits = js_sys::Array::of1(&JsValue::from_str("contents"));
        let file = File::new_with_str_sequence(&bits, name).unwrap();
        data.items().add_with_file(&file).unwrap();
    }
    data
}

fn drag_event(kind: &str, names: &[&str]) -> DragEvent {
    let init = DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_data_transfer(Some(&transfer(names)));
    DragEvent::new_with_event_init_dict(kind, &init).unwrap()
}

fn dispatch(id: &str, event: &Event) {
    element(id).dispatch_event(event).unwrap();
}

#[wasm_bindgen_test]
fn dropped_file_lands_in_the_input() {
    mount(FORM);
    let _bound = bind(&Config::new()).unwrap();

    let drop = drag_event("drop", &["report.csv", "extra.csv"]);
    dispatch("dropzone", &drop);

    assert!(drop.default_prevented());
    assert_eq!(label().as_deref(), Some("Selected: report.csv"));
    assert_eq!(input_names(), ["report.csv", "extra.csv"]);

    dispatch("dropzone", &drag_event("drop", &["data.json"]));
    assert_eq!(label().as_deref(), Some("Selected: data.json"));
    assert_eq!(input_names(), ["data.json"]);
}

#[wasm_bindgen_test]
fn drop_without_files_is_ignored() {
    mount(FORM);
    let _bound = bind(&Config::new()).unwrap();

    dispatch("dropzone", &drag_event("drop", &["keep.txt"]));
    dispatch("dropzone", &drag_event("drop", &[]));

    assert_eq!(label().as_deref(), Some("Selected: keep.txt"));
    assert_eq!(input_names(), ["keep.txt"]);
}

#[wasm_bindgen_test]
fn highlight_follows_the_drag() {
    mount(FORM);
    let bound = bind(&Config::new()).unwrap();
    assert!(!highlighted());

    let over = drag_event("dragover", &["a.txt"]);
    dispatch("dropzone", &over);
    assert!(over.default_prevented());
    assert!(highlighted());
    assert_eq!(bound.zone_state(), ZoneState::Hovering);

    dispatch("dropzone", &drag_event("dragleave", &[]));
    assert!(!highlighted());

    dispatch("dropzone", &drag_event("dragover", &["a.txt"]));
    dispatch("dropzone", &drag_event("drop", &["a.txt"]));
    assert!(!highlighted());
    assert_eq!(bound.zone_state(), ZoneState::Idle);
}

#[wasm_bindgen_test]
fn dialog_selection_updates_the_label() {
    mount(FORM);
    let _bound = bind(&Config::new()).unwrap();

    input().set_files(transfer(&["photo.png"]).files().as_ref());
    dispatch("sessionFile", &Event::new("change").unwrap());
    assert_eq!(label().as_deref(), Some("Selected: photo.png"));

    // a cancelled dialog
    input().set_files(transfer(&[]).files().as_ref());
    dispatch("sessionFile", &Event::new("change").unwrap());
    assert_eq!(label().as_deref(), Some("Selected: photo.png"));
}

#[wasm_bindgen_test]
fn stray_drops_do_not_navigate() {
    mount(FORM);
    let _bound = bind(&Config::new()).unwrap();

    let drop = drag_event("drop", &["stray.txt"]);
    dispatch("elsewhere", &drop);

    assert!(drop.default_prevented());
    assert!(input_names().is_empty());
    assert_eq!(label().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn listeners_go_away_with_the_handle() {
    mount(FORM);
    drop(bind(&Config::new()).unwrap());

    let drop = drag_event("drop", &["late.txt"]);
    dispatch("dropzone", &drop);

    assert!(!drop.default_prevented());
    assert!(input_names().is_empty());
}

#[wasm_bindgen_test]
fn missing_elements_fail_soft() {
    mount(r#"<div id="dropzone"></div><input type="file" id="sessionFile">"#);

    let err = bind(&Config::new()).err().unwrap();
    assert_eq!(
        err,
        BindError::MissingElement {
            id: "file-name".to_string()
        }
    );

    // launching on the same page is a no-op rather than a panic. The page-wide listeners would outlive this test.
    drop_uploader::launch(Config::new().suppress_global_drops(false));
}

#[wasm_bindgen_test]
fn file_input_must_be_an_input() {
    mount(r#"<div id="dropzone"></div><div id="sessionFile"></div><p id="file-name"></p>"#);

    let err = bind(&Config::new()).err().unwrap();
    assert_eq!(
        err,
        BindError::WrongElementType {
            id: "sessionFile".to_string(),
            expected: "HTMLInputElement",
        }
    );
}
