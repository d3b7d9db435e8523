//! Document access for the page engine
//!
//! Resolves every element the engine drives at mount time, measures the
//! page into a [`PageLayout`], and applies [`DomOp`] commands back to the
//! document. All selectors and inline styles live here; the engine only
//! ever sees indices into the element lists resolved at mount.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, Window,
};

use folio_engine::{
    Card, DomOp, NavLink, NoticeId, PageLayout, Section, Severity, SkillBar, Viewport,
};

// =============================================================================
// Selectors and class names
// =============================================================================

/// Fixed page header
pub const HEADER_SELECTOR: &str = ".header";

/// Hamburger button; its three `span` children are the bars
pub const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";

/// Navigation list, shown as a dropdown panel on small screens
pub const NAV_LIST_SELECTOR: &str = ".nav-list";

/// Navigation links with `#section` fragments
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Sections with fragment ids drive the scrollspy and reveals
pub const SECTION_SELECTOR: &str = "section[id]";

/// Skill bars carrying their fill percent in `data-width`
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";

/// Everything that reveals with the staggered card animation
pub const CARD_SELECTOR: &str = ".project-card, .highlight-item, .achievement-item, .contact-item";

/// Contact form
pub const FORM_SELECTOR: &str = ".contact-form";

/// Social links; the `title` attribute names the platform
pub const SOCIAL_LINK_SELECTOR: &str = ".social-link";

const HERO_BACKGROUND_SELECTOR: &str = ".hero-background";
const HERO_SUBTITLE_SELECTOR: &str = ".hero-subtitle";
const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
const RESUME_SELECTOR: &str = "a[href=\"#contact\"]";

const RAINBOW_KEYFRAMES: &str = "\
@keyframes rainbow {
    0% { filter: hue-rotate(0deg); }
    25% { filter: hue-rotate(90deg); }
    50% { filter: hue-rotate(180deg); }
    75% { filter: hue-rotate(270deg); }
    100% { filter: hue-rotate(360deg); }
}";

// =============================================================================
// Mount errors
// =============================================================================

/// Failure to resolve the document structure at mount
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountError {
    /// No global `window` object
    NoWindow,
    /// Window has no document
    NoDocument,
    /// Document has no body yet
    NoBody,
    /// A selector the page cannot work without matched nothing
    MissingElement(&'static str),
    /// An element exists but is not shaped the way the page needs
    MalformedElement {
        selector: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "browser window is not available"),
            Self::NoDocument => write!(f, "document is not available"),
            Self::NoBody => write!(f, "document has no body"),
            Self::MissingElement(selector) => {
                write!(f, "required element '{}' not found", selector)
            }
            Self::MalformedElement { selector, reason } => {
                write!(f, "element '{}' unusable: {}", selector, reason)
            }
        }
    }
}

impl std::error::Error for MountError {}

// =============================================================================
// Resolved page
// =============================================================================

/// Every element the engine drives, resolved once at mount
pub struct PageDom {
    window: Window,
    document: Document,
    body: HtmlElement,

    header: HtmlElement,
    menu_toggle: Option<HtmlElement>,
    toggle_bars: Vec<HtmlElement>,
    nav_list: Option<HtmlElement>,
    nav_links: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
    skill_bars: Vec<HtmlElement>,
    cards: Vec<HtmlElement>,
    hero_background: Option<HtmlElement>,
    hero_subtitle: Option<HtmlElement>,
    form: Option<HtmlFormElement>,
    submit_button: Option<HtmlElement>,
    submit_label: String,
    social_links: Vec<HtmlElement>,
    resume_link: Option<HtmlElement>,

    // Elements the engine creates during the session
    overlay: RefCell<Option<HtmlElement>>,
    notices: RefCell<BTreeMap<NoticeId, HtmlElement>>,
}

impl PageDom {
    /// Resolve the document structure. Fails fast on anything the page
    /// would otherwise trip over mid-session.
    pub fn resolve() -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let body = document.body().ok_or(MountError::NoBody)?;

        let header = query_one(&document, HEADER_SELECTOR)
            .ok_or(MountError::MissingElement(HEADER_SELECTOR))?;

        let menu_toggle = query_one(&document, MENU_TOGGLE_SELECTOR);
        let nav_list = query_one(&document, NAV_LIST_SELECTOR);
        let toggle_bars = match &menu_toggle {
            Some(toggle) => {
                if nav_list.is_none() {
                    return Err(MountError::MissingElement(NAV_LIST_SELECTOR));
                }
                let mut bars = query_all_in(toggle, "span");
                if bars.len() < 3 {
                    return Err(MountError::MalformedElement {
                        selector: MENU_TOGGLE_SELECTOR,
                        reason: "expected three bar spans",
                    });
                }
                bars.truncate(3);
                bars
            }
            None => Vec::new(),
        };

        let form = query_one(&document, FORM_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let submit_button = match &form {
            Some(form) => Some(
                query_one_in(form, SUBMIT_BUTTON_SELECTOR)
                    .ok_or(MountError::MissingElement(SUBMIT_BUTTON_SELECTOR))?,
            ),
            None => None,
        };
        let submit_label = submit_button
            .as_ref()
            .and_then(|b| b.text_content())
            .unwrap_or_default();

        // Only a "#contact" link that reads like a resume button gets the
        // download teaser
        let resume_link = query_one(&document, RESUME_SELECTOR)
            .filter(|el| el.text_content().unwrap_or_default().contains("Resume"));

        Ok(Self {
            header,
            menu_toggle,
            toggle_bars,
            nav_list,
            nav_links: query_all(&document, NAV_LINK_SELECTOR),
            sections: query_all(&document, SECTION_SELECTOR),
            skill_bars: query_all(&document, SKILL_BAR_SELECTOR),
            cards: query_all(&document, CARD_SELECTOR),
            hero_background: query_one(&document, HERO_BACKGROUND_SELECTOR),
            hero_subtitle: query_one(&document, HERO_SUBTITLE_SELECTOR),
            form,
            submit_button,
            submit_label,
            social_links: query_all(&document, SOCIAL_LINK_SELECTOR),
            resume_link,
            overlay: RefCell::new(None),
            notices: RefCell::new(BTreeMap::new()),
            window,
            document,
            body,
        })
    }

    /// Measure the resolved elements into the engine's layout snapshot
    pub fn measure_layout(&self) -> PageLayout {
        let scroll_y = self.scroll_y() as f64;

        let nav_links = self
            .nav_links
            .iter()
            .map(|el| {
                let href = el.get_attribute("href").unwrap_or_default();
                NavLink::new(href.strip_prefix('#').unwrap_or_default())
            })
            .collect();

        let sections = self
            .sections
            .iter()
            .map(|el| Section::new(el.id(), el.offset_top() as f32, el.offset_height() as f32))
            .collect();

        let skill_bars = self
            .skill_bars
            .iter()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                let pct = el
                    .get_attribute("data-width")
                    .and_then(|w| w.trim().parse::<f32>().ok())
                    .unwrap_or(0.0);
                SkillBar::new(
                    (rect.top() + scroll_y) as f32,
                    rect.height() as f32,
                    pct,
                )
            })
            .collect();

        let cards = self
            .cards
            .iter()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                Card::new((rect.top() + scroll_y) as f32, rect.height() as f32)
            })
            .collect();

        PageLayout {
            header_height: self.header.offset_height() as f32,
            nav_links,
            sections,
            skill_bars,
            cards,
            hero_subtitle: self
                .hero_subtitle
                .as_ref()
                .and_then(|el| el.text_content())
                .filter(|text| !text.is_empty()),
            has_hero_background: self.hero_background.is_some(),
        }
    }

    /// Current scroll offset in pixels
    pub fn scroll_y(&self) -> f32 {
        self.window.page_y_offset().unwrap_or(0.0) as f32
    }

    /// Current viewport (scroll offset plus window height)
    pub fn viewport(&self) -> Viewport {
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        Viewport::new(self.scroll_y(), height as f32)
    }

    /// Milliseconds since page origin, the same clock animation frames use
    pub fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn nav_links(&self) -> &[HtmlElement] {
        &self.nav_links
    }

    pub fn cards(&self) -> &[HtmlElement] {
        &self.cards
    }

    pub fn social_links(&self) -> &[HtmlElement] {
        &self.social_links
    }

    pub fn menu_toggle(&self) -> Option<&HtmlElement> {
        self.menu_toggle.as_ref()
    }

    pub fn form(&self) -> Option<&HtmlFormElement> {
        self.form.as_ref()
    }

    pub fn resume_link(&self) -> Option<&HtmlElement> {
        self.resume_link.as_ref()
    }

    /// Install the hue-rotate keyframes the easter egg animates with
    pub fn inject_rainbow_keyframes(&self) {
        let Ok(style) = self.document.create_element("style") else {
            return;
        };
        style.set_text_content(Some(RAINBOW_KEYFRAMES));
        if let Some(head) = self.document.head() {
            let _ = head.append_child(&style);
        }
    }

    // =========================================================================
    // Command application
    // =========================================================================

    /// Apply one engine command to the document
    pub fn apply(&self, op: &DomOp) {
        match op {
            DomOp::OverlayInsert => self.overlay_insert(),
            DomOp::OverlayHide => {
                if let Some(overlay) = self.overlay.borrow().as_ref() {
                    let _ = overlay.class_list().add_1("hide");
                }
            }
            DomOp::OverlayRemove => {
                if let Some(overlay) = self.overlay.borrow_mut().take() {
                    overlay.remove();
                }
            }
            DomOp::MenuSet { open } => self.menu_set(*open),
            DomOp::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(*top as f64);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            DomOp::NavActivate { link } => {
                for el in &self.nav_links {
                    let _ = el.class_list().remove_1("active");
                }
                if let Some(el) = link.and_then(|i| self.nav_links.get(i)) {
                    let _ = el.class_list().add_1("active");
                }
            }
            DomOp::SectionPrime { section } => {
                if let Some(el) = self.sections.get(*section) {
                    let _ = el.class_list().add_1("animate-on-scroll");
                }
            }
            DomOp::SectionAnimate { section } => {
                if let Some(el) = self.sections.get(*section) {
                    let _ = el.class_list().add_1("animate");
                }
            }
            DomOp::CardPrime { card } => {
                if let Some(el) = self.cards.get(*card) {
                    set_style(el, "opacity", "0");
                    set_style(el, "transform", "translateY(20px)");
                    set_style(
                        el,
                        "transition",
                        "opacity 0.6s ease-out, transform 0.6s ease-out",
                    );
                }
            }
            DomOp::CardShow { card } => {
                if let Some(el) = self.cards.get(*card) {
                    set_style(el, "opacity", "1");
                    set_style(el, "transform", "translateY(0)");
                    let _ = el.class_list().add_1("revealed");
                }
            }
            DomOp::CardLift { card, lifted } => {
                if let Some(el) = self.cards.get(*card) {
                    let transform = if *lifted {
                        "translateY(-8px) scale(1.02)"
                    } else {
                        "translateY(0) scale(1)"
                    };
                    set_style(el, "transform", transform);
                }
            }
            DomOp::SkillFill { bar, pct } => {
                if let Some(el) = self.skill_bars.get(*bar) {
                    set_style(el, "width", &format!("{}%", pct));
                    let _ = el.class_list().add_1("animated");
                }
            }
            DomOp::SubmitPending { pending } => self.submit_pending(*pending),
            DomOp::FormReset => {
                if let Some(form) = &self.form {
                    form.reset();
                }
            }
            DomOp::NoticeSpawn {
                id,
                message,
                severity,
            } => self.notice_spawn(*id, message, *severity),
            DomOp::NoticeSlideIn { id } => {
                if let Some(el) = self.notices.borrow().get(id) {
                    set_style(el, "transform", "translateX(0)");
                }
            }
            DomOp::NoticeSlideOut { id } => {
                if let Some(el) = self.notices.borrow().get(id) {
                    set_style(el, "transform", "translateX(100%)");
                }
            }
            DomOp::NoticeRemove { id } => {
                if let Some(el) = self.notices.borrow_mut().remove(id) {
                    el.remove();
                }
            }
            DomOp::HeaderCondense { condensed } => {
                if *condensed {
                    set_style(&self.header, "background", "rgba(26, 26, 46, 0.98)");
                    set_style(&self.header, "box-shadow", "0 4px 20px rgba(0, 0, 0, 0.1)");
                } else {
                    set_style(&self.header, "background", "rgba(26, 26, 46, 0.95)");
                    set_style(&self.header, "box-shadow", "none");
                }
            }
            DomOp::HeaderSlide { hidden } => {
                let transform = if *hidden {
                    "translateY(-100%)"
                } else {
                    "translateY(0)"
                };
                set_style(&self.header, "transform", transform);
            }
            DomOp::HeroParallax { offset } => {
                if let Some(el) = &self.hero_background {
                    set_style(el, "transform", &format!("translateY({}px)", offset));
                }
            }
            DomOp::TypeText { text } => {
                if let Some(el) = &self.hero_subtitle {
                    el.set_text_content(Some(text));
                }
            }
            DomOp::RainbowSet { on } => {
                let animation = if *on { "rainbow 2s infinite" } else { "" };
                set_style(&self.body, "animation", animation);
            }
        }
    }

    fn overlay_insert(&self) {
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            return;
        };
        el.set_class_name("loading");
        el.set_inner_html("<div class=\"loading-spinner\"></div>");
        let _ = self.body.append_child(&el);
        *self.overlay.borrow_mut() = Some(el);
    }

    fn menu_set(&self, open: bool) {
        let Some(list) = &self.nav_list else {
            return;
        };
        if open {
            set_style(list, "display", "flex");
            set_style(list, "position", "absolute");
            set_style(list, "top", "100%");
            set_style(list, "left", "0");
            set_style(list, "right", "0");
            set_style(list, "background-color", "rgba(26, 26, 46, 0.95)");
            set_style(list, "flex-direction", "column");
            set_style(list, "padding", "20px");
            set_style(list, "backdrop-filter", "blur(10px)");
            set_style(list, "border-radius", "0 0 12px 12px");
        } else {
            set_style(list, "display", "none");
        }
        if let [top, middle, bottom] = self.toggle_bars.as_slice() {
            if open {
                set_style(top, "transform", "rotate(45deg) translate(5px, 5px)");
                set_style(middle, "opacity", "0");
                set_style(bottom, "transform", "rotate(-45deg) translate(7px, -6px)");
            } else {
                set_style(top, "transform", "none");
                set_style(middle, "opacity", "1");
                set_style(bottom, "transform", "none");
            }
        }
    }

    fn submit_pending(&self, pending: bool) {
        let Some(button) = &self.submit_button else {
            return;
        };
        if pending {
            button.set_text_content(Some("Sending..."));
        } else {
            button.set_text_content(Some(&self.submit_label));
        }
        if let Some(button) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
            button.set_disabled(pending);
        }
    }

    fn notice_spawn(&self, id: NoticeId, message: &str, severity: Severity) {
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            return;
        };
        el.set_class_name(&format!("notification notification--{}", severity.as_str()));
        el.set_text_content(Some(message));

        set_style(&el, "position", "fixed");
        set_style(&el, "top", "20px");
        set_style(&el, "right", "20px");
        set_style(&el, "padding", "16px 24px");
        set_style(&el, "border-radius", "8px");
        set_style(&el, "color", "#fff");
        set_style(&el, "font-weight", "500");
        set_style(&el, "z-index", "10000");
        set_style(&el, "transform", "translateX(100%)");
        set_style(&el, "transition", "transform 0.3s ease-out");
        set_style(&el, "max-width", "400px");
        set_style(&el, "word-wrap", "break-word");

        let gradient = match severity {
            Severity::Success => "linear-gradient(135deg, #10b981, #059669)",
            Severity::Error => "linear-gradient(135deg, #ef4444, #dc2626)",
            Severity::Warning => "linear-gradient(135deg, #f59e0b, #d97706)",
            Severity::Info => "linear-gradient(135deg, #3b82f6, #2563eb)",
        };
        set_style(&el, "background", gradient);

        let _ = self.body.append_child(&el);
        self.notices.borrow_mut().insert(id, el);
    }
}

// =============================================================================
// Query helpers
// =============================================================================

fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn query_one_in(root: &web_sys::Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn query_all_in(root: &web_sys::Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: web_sys::NodeList) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            out.push(el);
        }
    }
    out
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
