//! Route Table
//!
//! Static tree of route descriptors, defined once at startup.

/// Views that a route can construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    Home,
    HomeIndex,
    TaskCenter,
    Profile,
    ImageProcessing,
    LazyLoadDemo,
    Compress,
    Annotate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub requires_auth: bool,
    /// Menu grouping key
    pub key: Option<&'static str>,
}

impl RouteMeta {
    const NONE: RouteMeta = RouteMeta {
        title: None,
        icon: None,
        requires_auth: false,
        key: None,
    };

    const fn menu(title: &'static str, icon: &'static str, key: &'static str) -> Self {
        RouteMeta {
            title: Some(title),
            icon: Some(icon),
            requires_auth: false,
            key: Some(key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// Segment relative to the parent; absolute at the top level.
    /// `*` matches anything not matched by an earlier sibling.
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
    pub meta: RouteMeta,
    pub children: &'static [RouteRecord],
}

impl RouteRecord {
    const fn leaf(path: &'static str, name: &'static str, view: View) -> Self {
        RouteRecord {
            path,
            name: Some(name),
            target: RouteTarget::View(view),
            meta: RouteMeta::NONE,
            children: &[],
        }
    }

    const fn redirect(path: &'static str, to: &'static str) -> Self {
        RouteRecord {
            path,
            name: None,
            target: RouteTarget::Redirect(to),
            meta: RouteMeta::NONE,
            children: &[],
        }
    }

    const fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    const fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    const fn with_children(mut self, children: &'static [RouteRecord]) -> Self {
        self.children = children;
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.path == "*"
    }

    pub fn view(&self) -> Option<View> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";

const IMAGE_PROCESSING_ROUTES: &[RouteRecord] = &[
    RouteRecord::leaf("lazy-load", "LazyLoad", View::LazyLoadDemo)
        .with_meta(RouteMeta::menu("Lazy Load", "PictureOutlined", "lazy-load")),
    RouteRecord::leaf("compress", "Compress", View::Compress)
        .with_meta(RouteMeta::menu("Compress", "CompressOutlined", "compress")),
    RouteRecord::leaf("annotate", "Annotate", View::Annotate)
        .with_meta(RouteMeta::menu("Annotate", "EditOutlined", "annotate")),
];

const HOME_ROUTES: &[RouteRecord] = &[
    RouteRecord::leaf("", "HomeIndex", View::HomeIndex)
        .with_meta(RouteMeta::menu("Home", "DashboardOutlined", "home")),
    RouteRecord::leaf("task-center", "TaskCenter", View::TaskCenter)
        .with_meta(RouteMeta::menu("Task Center", "UnorderedListOutlined", "task-center")),
    RouteRecord::leaf("profile", "Profile", View::Profile)
        .with_meta(RouteMeta::menu("Profile", "UserOutlined", "profile")),
    RouteRecord::leaf("image-processing", "ImageProcessing", View::ImageProcessing)
        .with_meta(RouteMeta::menu("Image Processing", "FileImageOutlined", "image-processing"))
        .with_children(IMAGE_PROCESSING_ROUTES),
];

/// Application route tree
pub const ROUTES: &[RouteRecord] = &[
    RouteRecord::redirect("/", HOME_PATH),
    RouteRecord::leaf("/login", "Login", View::Login)
        .with_meta(RouteMeta { title: Some("Login"), ..RouteMeta::NONE }),
    RouteRecord::leaf("/register", "Register", View::Register)
        .with_meta(RouteMeta { title: Some("Register"), ..RouteMeta::NONE }),
    RouteRecord::leaf("/home", "Home", View::Home)
        .requires_auth()
        .with_children(HOME_ROUTES),
    RouteRecord::redirect("*", HOME_PATH),
];

/// Children of `/home`, used to build the sidebar menu
pub fn home_menu() -> &'static [RouteRecord] {
    HOME_ROUTES
}

/// Full path of a `/home` child, e.g. `task-center` -> `/home/task-center`
pub fn home_child_path(segment: &str) -> String {
    if segment.is_empty() {
        HOME_PATH.to_string()
    } else {
        format!("{}/{}", HOME_PATH, segment)
    }
}
