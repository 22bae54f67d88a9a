//! Which positional parameters each supported method takes.

use serde::{Serialize, Serializer};
use std::fmt;

use self::Slot::*;

/// The API family a method name belongs to, read from its prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    MetaWeblog,
    Blogger,
    WordPress,
}

impl Dialect {
    pub fn prefix(self) -> &'static str {
        match self {
            Dialect::MetaWeblog => "metaWeblog",
            Dialect::Blogger => "blogger",
            Dialect::WordPress => "wp",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Dialect> {
        [Dialect::MetaWeblog, Dialect::Blogger, Dialect::WordPress]
            .iter()
            .copied()
            .find(|dialect| dialect.prefix() == prefix)
    }
}

/// What a positional parameter holds and how it is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    AppKey,
    BlogId,
    PostId,
    PageId,
    UserName,
    Password,
    Post,
    Page,
    MediaObject,
    /// Boolean flag, false only for `0` and `false`.
    Publish,
    /// Signed 32 bits integer.
    Count,
}

impl Slot {
    /// Parameter name as the API documentation spells it.
    pub fn label(self) -> &'static str {
        match self {
            AppKey => "appKey",
            BlogId => "blogId",
            PostId => "postId",
            PageId => "pageId",
            UserName => "username",
            Password => "password",
            Post => "post",
            Page => "page",
            MediaObject => "mediaObject",
            Publish => "publish",
            Count => "numberOfPosts",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    NewPost,
    EditPost,
    GetPost,
    NewMediaObject,
    GetCategories,
    GetRecentPosts,
    MetaWeblogGetUsersBlogs,
    BloggerGetUsersBlogs,
    DeletePost,
    GetUserInfo,
    GetAuthors,
    GetPageList,
    GetPages,
    GetTags,
    NewPage,
    GetPage,
    EditPage,
    DeletePage,
}

struct Entry {
    method: Method,
    dialect: Dialect,
    name: &'static str,
    slots: &'static [Slot],
}

macro_rules! entry {
    ($method:ident, $dialect:ident, $name:expr, $slots:expr) => {
        Entry {
            method: Method::$method,
            dialect: Dialect::$dialect,
            name: $name,
            slots: $slots,
        }
    };
}

const BLOG_USER_PASS: &[Slot] = &[BlogId, UserName, Password];
const APP_USER_PASS: &[Slot] = &[AppKey, UserName, Password];

/// Indexed by `Method as usize`.
static METHODS: &[Entry] = &[
    entry!(NewPost, MetaWeblog, "metaWeblog.newPost", &[BlogId, UserName, Password, Post, Publish]),
    entry!(EditPost, MetaWeblog, "metaWeblog.editPost", &[PostId, UserName, Password, Post, Publish]),
    entry!(GetPost, MetaWeblog, "metaWeblog.getPost", &[PostId, UserName, Password]),
    entry!(NewMediaObject, MetaWeblog, "metaWeblog.newMediaObject", &[BlogId, UserName, Password, MediaObject]),
    entry!(GetCategories, MetaWeblog, "metaWeblog.getCategories", BLOG_USER_PASS),
    entry!(GetRecentPosts, MetaWeblog, "metaWeblog.getRecentPosts", &[BlogId, UserName, Password, Count]),
    entry!(MetaWeblogGetUsersBlogs, MetaWeblog, "metaWeblog.getUsersBlogs", APP_USER_PASS),
    entry!(BloggerGetUsersBlogs, Blogger, "blogger.getUsersBlogs", APP_USER_PASS),
    entry!(DeletePost, Blogger, "blogger.deletePost", &[AppKey, PostId, UserName, Password, Publish]),
    entry!(GetUserInfo, Blogger, "blogger.getUserInfo", APP_USER_PASS),
    entry!(GetAuthors, WordPress, "wp.getAuthors", BLOG_USER_PASS),
    entry!(GetPageList, WordPress, "wp.getPageList", BLOG_USER_PASS),
    entry!(GetPages, WordPress, "wp.getPages", BLOG_USER_PASS),
    entry!(GetTags, WordPress, "wp.getTags", BLOG_USER_PASS),
    entry!(NewPage, WordPress, "wp.newPage", &[BlogId, UserName, Password, Page, Publish]),
    entry!(GetPage, WordPress, "wp.getPage", &[BlogId, PageId, UserName, Password]),
    entry!(EditPage, WordPress, "wp.editPage", &[BlogId, PageId, UserName, Password, Page, Publish]),
    entry!(DeletePage, WordPress, "wp.deletePage", &[BlogId, UserName, Password, PageId]),
];

impl Method {
    /// Looks a wire method name up. Names are case sensitive.
    pub fn from_name(name: &str) -> Option<Method> {
        METHODS
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.method)
    }

    pub fn all() -> impl Iterator<Item = Method> {
        METHODS.iter().map(|entry| entry.method)
    }

    fn entry(self) -> &'static Entry {
        &METHODS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// The positional parameters, in the order they are sent.
    pub fn schema(self) -> &'static [Slot] {
        self.entry().slots
    }

    pub fn dialect(self) -> Dialect {
        self.entry().dialect
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
