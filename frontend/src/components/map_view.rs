use shared::{MapConfig, MarkerSpec};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::services::leaflet::LeafletMap;
use crate::services::Logger;

const COMPONENT: &str = "map-view";

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub config: MapConfig,
    /// One entry per visible story with usable coordinates
    pub markers: Vec<MarkerSpec>,
}

/// Leaflet map fitted to the city, with a tint overlay that lets pointer events through
pub struct MapView {
    container_ref: NodeRef,
    map: Option<LeafletMap>,
}

impl Component for MapView {
    type Message = ();
    type Properties = MapViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            container_ref: NodeRef::default(),
            map: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().markers != old_props.markers {
            self.draw_markers(&ctx.props().markers);
        }
        // The map owns its DOM subtree; re-rendering the container would not change it
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map-frame">
                <div class="map-container" ref={self.container_ref.clone()}></div>
                <div class="map-tint"></div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let Some(element) = self.container_ref.cast::<HtmlElement>() else {
            Logger::error_with_component(COMPONENT, "Map container missing from the DOM");
            return;
        };

        match LeafletMap::mount(&element, &ctx.props().config) {
            Ok(map) => {
                self.map = Some(map);
                self.draw_markers(&ctx.props().markers);
            }
            Err(e) => Logger::error_with_component(
                COMPONENT,
                &format!("Failed to create map: {:?}", e),
            ),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(map) = self.map.take() {
            map.destroy();
        }
    }
}

impl MapView {
    fn draw_markers(&self, markers: &[MarkerSpec]) {
        let Some(map) = self.map.as_ref() else {
            return;
        };

        match map.set_markers(markers) {
            Ok(()) => Logger::debug_with_component(
                COMPONENT,
                &format!("Placed {} markers", markers.len()),
            ),
            Err(e) => Logger::error_with_component(
                COMPONENT,
                &format!("Failed to place markers: {:?}", e),
            ),
        }
    }
}
