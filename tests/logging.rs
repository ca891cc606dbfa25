use log::{Level, LevelFilter, Metadata, Record};
use std::sync::{Mutex, Once};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if record.target().starts_with("bmfont_reader") {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn captured_info<F: FnOnce()>(run: F) -> Vec<String> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER)
            .map(|()| log::set_max_level(LevelFilter::Trace))
            .expect("logger installed once");
    });
    LOGGER.records.lock().unwrap().clear();
    run();
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, message)| message.clone())
        .collect()
}

// Single test in this binary so the shared logger never sees another test's records.
#[test]
fn text_parsing_logs_start_and_finish_at_info() {
    let text = "info face=\"Logged\" size=12 bold=0 italic=0 charset=\"\" unicode=1 stretchH=100 \
                smooth=1 aa=1 padding=0,0,0,0 spacing=1,1\n\
                page id=0 file=\"logged_0.png\"\n\
                char id=65 x=0 y=0 width=1 height=1 xoffset=0 yoffset=0 xadvance=2 page=0 chnl=15\n\
                kerning first=65 second=65 amount=-1\n";

    let messages = captured_info(|| {
        bmfont_reader::parse_str(text).expect("parse");
    });
    assert_eq!(messages.len(), 2, "info messages were {:?}", messages);
    assert!(messages[0].starts_with("Assembling BMFont descriptor"), "{:?}", messages);
    assert!(
        messages[1].contains("4 lines")
            && messages[1].contains("face='Logged'")
            && messages[1].contains("1 glyphs, 1 kernings, 1 pages"),
        "{:?}",
        messages
    );

    let messages = captured_info(|| {
        bmfont_reader::parse_reader(text.as_bytes()).expect("parse bytes");
    });
    assert_eq!(messages.len(), 2, "info messages were {:?}", messages);
    assert!(messages[1].contains("1 glyphs, 1 kernings, 1 pages"), "{:?}", messages);
}
