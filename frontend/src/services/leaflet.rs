//! Minimal bindings to the global Leaflet `L` object loaded by `index.html`.

use js_sys::{Array, Object, Reflect};
use shared::{LatLng, MapConfig, MarkerSpec, PopupContent};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type RawMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element: &HtmlElement, options: &JsValue) -> Result<RawMap, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &RawMap, bounds: &Array);

    #[wasm_bindgen(method)]
    fn remove(this: &RawMap);

    #[derive(Debug, Clone)]
    pub type RawLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> RawLayer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> RawLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &Array, options: &JsValue) -> RawLayer;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &RawLayer, map: &RawMap);

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &RawLayer, layer: &RawLayer);

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &RawLayer);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &RawLayer, content: &Element);
}

/// A live Leaflet map with one layer holding the story markers
#[derive(Debug)]
pub struct LeafletMap {
    map: RawMap,
    markers: RawLayer,
    config: MapConfig,
}

impl LeafletMap {
    /// Attach a map to `element`, fitted to the configured bounds
    pub fn mount(element: &HtmlElement, config: &MapConfig) -> Result<Self, JsValue> {
        if !leaflet_loaded() {
            return Err(JsValue::from_str("Leaflet (global L) is not loaded"));
        }

        let options = js_object(&[(
            "scrollWheelZoom",
            JsValue::from_bool(config.scroll_wheel_zoom),
        )])?;
        let map = create_map(element, &options)?;
        map.fit_bounds(&bounds_array(config));

        let tile_options = js_object(&[("attribution", JsValue::from_str(&config.attribution))])?;
        tile_layer(&config.tile_url, &tile_options).add_to(&map);

        let markers = layer_group();
        markers.add_to(&map);

        Ok(Self {
            map,
            markers,
            config: config.clone(),
        })
    }

    /// Replace every marker on the map
    pub fn set_markers(&self, specs: &[MarkerSpec]) -> Result<(), JsValue> {
        self.markers.clear_layers();
        let document = document()?;

        for spec in specs {
            let icon = icon(&self.icon_options(&spec.icon_url)?);
            let options = js_object(&[("icon", icon)])?;
            let marker = marker(&lat_lng(spec.position), &options);
            marker.bind_popup(&popup_element(&document, &spec.popup)?);
            self.markers.add_layer(&marker);
        }
        Ok(())
    }

    pub fn destroy(&self) {
        self.map.remove();
    }

    fn icon_options(&self, icon_url: &str) -> Result<JsValue, JsValue> {
        let (width, height) = self.config.icon_size;
        let (anchor_x, anchor_y) = self.config.icon_anchor;
        let (popup_x, popup_y) = self.config.popup_anchor;
        js_object(&[
            ("iconUrl", JsValue::from_str(icon_url)),
            ("iconSize", pair(width as f64, height as f64).into()),
            ("iconAnchor", pair(anchor_x as f64, anchor_y as f64).into()),
            ("popupAnchor", pair(popup_x as f64, popup_y as f64).into()),
            ("className", JsValue::from_str(&self.config.icon_class)),
        ])
    }
}

fn leaflet_loaded() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Popup body built from text nodes, so story text is never parsed as HTML
fn popup_element(document: &Document, popup: &PopupContent) -> Result<Element, JsValue> {
    let container = document.create_element("div")?;
    container.set_class_name("story-popup");

    let title = document.create_element("strong")?;
    title.set_text_content(Some(&popup.location));
    container.append_child(&title)?;
    container.append_child(&document.create_element("br")?.into())?;

    let story = document.create_element("span")?;
    story.set_text_content(Some(&popup.story));
    container.append_child(&story)?;
    container.append_child(&document.create_element("br")?.into())?;

    let stars = document.create_element("span")?;
    stars.set_class_name("star-row");
    for filled in popup.stars {
        let star = document.create_element("span")?;
        star.set_class_name(if filled { "star filled" } else { "star" });
        star.set_text_content(Some("★"));
        stars.append_child(&star)?;
    }
    container.append_child(&stars)?;

    Ok(container)
}

fn js_object(entries: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        if !Reflect::set(&object, &JsValue::from_str(key), value)? {
            return Err(JsValue::from_str(&format!("could not set option {key}")));
        }
    }
    Ok(object.into())
}

fn pair(a: f64, b: f64) -> Array {
    Array::of2(&JsValue::from_f64(a), &JsValue::from_f64(b))
}

fn lat_lng(position: LatLng) -> Array {
    pair(position.lat, position.lng)
}

fn bounds_array(config: &MapConfig) -> Array {
    Array::of2(
        &lat_lng(config.bounds.south_west),
        &lat_lng(config.bounds.north_east),
    )
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn popup(location: &str, story: &str, filled: usize) -> PopupContent {
        let mut stars = [false; 5];
        for star in stars.iter_mut().take(filled) {
            *star = true;
        }
        PopupContent {
            location: location.to_string(),
            story: story.to_string(),
            stars,
        }
    }

    #[wasm_bindgen_test]
    fn test_popup_renders_stars() {
        let document = document().unwrap();
        let element = popup_element(&document, &popup("Lalbagh", "Flower show", 3)).unwrap();

        assert_eq!(element.get_elements_by_class_name("star").length(), 5);
        assert_eq!(element.get_elements_by_class_name("filled").length(), 3);
    }

    #[wasm_bindgen_test]
    fn test_popup_text_is_not_markup() {
        let document = document().unwrap();
        let element =
            popup_element(&document, &popup("<b>Ulsoor</b>", "<img src=x onerror=alert(1)>", 0))
                .unwrap();

        assert_eq!(element.get_elements_by_tag_name("img").length(), 0);
        assert!(element.text_content().unwrap().contains("<b>Ulsoor</b>"));
    }

    #[wasm_bindgen_test]
    fn test_js_object_sets_every_option() {
        let object = js_object(&[
            ("iconUrl", JsValue::from_str("heart.png")),
            ("scrollWheelZoom", JsValue::from_bool(false)),
        ])
        .unwrap();

        let icon_url = Reflect::get(&object, &JsValue::from_str("iconUrl")).unwrap();
        assert_eq!(icon_url.as_string().as_deref(), Some("heart.png"));
        let zoom = Reflect::get(&object, &JsValue::from_str("scrollWheelZoom")).unwrap();
        assert_eq!(zoom.as_bool(), Some(false));
    }

    #[wasm_bindgen_test]
    fn test_mount_without_leaflet_fails_cleanly() {
        if leaflet_loaded() {
            return;
        }
        let document = document().unwrap();
        let element: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        assert!(LeafletMap::mount(&element, &MapConfig::default()).is_err());
    }
}
