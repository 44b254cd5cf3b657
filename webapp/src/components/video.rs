use dioxus::prelude::*;

pub const DEMO_VIDEO_WIDTH: u32 = 600;

// sources in order of preference
pub const DEMO_VIDEO_SOURCES: &[(&str, &str)] = &[
    ("/assets/dijkstra.webm", "video/webm"),
    ("/assets/dijkstra.mp4", "video/mp4"),
];

#[component]
pub fn DijkstraVideo() -> Element {
    rsx! {
        video {
            class: "demo-video",
            autoplay: true,
            r#loop: true,
            muted: true,
            playsinline: true,
            width: "{DEMO_VIDEO_WIDTH}",
            for (src, kind) in DEMO_VIDEO_SOURCES.iter() {
                source { src: *src, r#type: *kind }
            }
            "Sorry, your browser cannot play this demo video."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webm_comes_before_mp4() {
        let html = dioxus_ssr::render_element(rsx! { DijkstraVideo {} });

        let webm = html.find("/assets/dijkstra.webm").unwrap();
        let mp4 = html.find("/assets/dijkstra.mp4").unwrap();

        assert!(webm < mp4);
        assert!(html.contains(r#"width="600""#));
        assert!(html.contains("your browser cannot play"));
    }
}
