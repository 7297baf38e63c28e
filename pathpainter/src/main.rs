use pathpainter_lib::{Layout, PainterModel};
use waygrid_core::VisualizerConfig;
use waygrid_winit::{WinitConfig, WinitDriver};

/// Common system font locations, tried in order. Text rendering is
/// skipped (with a warning) when none is present.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn load_system_font() -> Option<Vec<u8>> {
    for path in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(path) {
            log::debug!("using font {path}");
            return Some(data);
        }
    }
    log::warn!("no system font found, labels will not be drawn");
    None
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let viz = VisualizerConfig::default();
    let layout = Layout::new(&viz);

    let driver = WinitDriver::new(WinitConfig {
        title: "pathpainter".into(),
        viz,
        window_width: layout.window_width(),
        window_height: layout.window_height(),
        font_data: load_system_font(),
        font_size: 18.0,
    });

    driver.run(Box::new(PainterModel::new(viz)))
}
