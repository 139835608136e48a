//! Literal course entries.
//!
//! This table is the authoritative source data for the storefront. Entries
//! are authored by hand in display order (ascending id); changing the
//! catalog means editing this table and redeploying.

use ecourses_core::ProductId;
use ecourses_media::MediaResolver;

use crate::product::{Price, Product, Specifications};

/// Authored portion of a course record; media URLs are derived at build
/// time, never written here.
struct CourseEntry {
    id: u32,
    name: &'static str,
    price_cents: u64,
    description: &'static str,
    detailed_description: &'static str,
    category: &'static str,
    features: &'static [&'static str],
    specifications: &'static [(&'static str, &'static str)],
    in_stock: bool,
}

impl CourseEntry {
    fn build(&self, resolver: &MediaResolver) -> Product {
        let id = ProductId::new(self.id);
        Product {
            id,
            name: self.name.to_string(),
            price: Price::from_cents(self.price_cents),
            image: resolver.image_url(id),
            images: resolver.image_urls(id),
            video: resolver.video_url(id),
            videos: resolver.video_urls(id),
            description: self.description.to_string(),
            detailed_description: self.detailed_description.to_string(),
            category: self.category.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            specifications: self
                .specifications
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Specifications>(),
            in_stock: self.in_stock,
        }
    }
}

/// Build every course record, deriving media URLs through the resolver.
pub(crate) fn course_entries(resolver: &MediaResolver) -> Vec<Product> {
    COURSES.iter().map(|c| c.build(resolver)).collect()
}

const COURSES: &[CourseEntry] = &[
    CourseEntry {
        id: 1,
        name: "WordPress Fundamentals: Platform Setup & Configuration",
        price_cents: 699,
        description: "Learn WordPress basics: choosing your platform, local vs remote development, and initial configuration.",
        detailed_description: "Master WordPress fundamentals including platform differences between WordPress.com & WordPress.org, local development setup with Flywheel, and essential configuration steps. Perfect for complete beginners.",
        category: "WordPress Basics",
        features: &[
            "1.5 hours of content",
            "WordPress platform comparison",
            "Local development setup",
            "Configuration and preferences",
            "Workflow optimization",
        ],
        specifications: &[
            ("Duration", "1.5 hours"),
            ("Level", "Complete Beginner"),
            ("Language", "English"),
            ("Topics", "WordPress setup, configuration"),
            ("Access", "6 months"),
            ("Certificate", "Basic completion badge"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 2,
        name: "WordPress Content Management: Pages, Menus & Navigation",
        price_cents: 999,
        description: "Master WordPress content creation, pages, custom navigation menus, and site structure.",
        detailed_description: "Learn essential WordPress content management including creating pages, building custom navigation menus, and organizing your site structure for optimal user experience.",
        category: "WordPress Content",
        features: &[
            "2 hours of practical training",
            "WordPress pages creation",
            "Custom navigation menus",
            "Site structure planning",
            "Content organization",
        ],
        specifications: &[
            ("Duration", "2 hours"),
            ("Level", "Beginner"),
            ("Topics", "Pages, menus, navigation, content"),
            ("Skills", "Content management, site structure"),
            ("Access", "8 months"),
            ("Support", "Community forum access"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 3,
        name: "WordPress Plugins, Widgets & Theme Basics",
        price_cents: 1999,
        description: "Learn essential WordPress plugins, widgets, and theme fundamentals for customizing your website.",
        detailed_description: "Master WordPress customization through plugins, widgets, and themes. Learn how to extend functionality, customize layouts, and choose the best themes for your projects.",
        category: "WordPress Customization",
        features: &[
            "1 hour of focused training",
            "WordPress plugins introduction",
            "Widget management and setup",
            "Theme selection and basics",
            "Customization fundamentals",
        ],
        specifications: &[
            ("Duration", "1 hour"),
            ("Level", "Beginner to Intermediate"),
            ("Topics", "Plugins, widgets, themes"),
            ("Practice", "Hands-on customization"),
            ("Access", "10 months"),
            ("Bonus", "Plugin recommendations guide"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 4,
        name: "WordPress Theme Installation & Child Themes",
        price_cents: 2999,
        description: "Learn theme installation, activation, and creating child themes for safe customizations.",
        detailed_description: "Master WordPress theme management including installation, activation, and creating child themes. Learn best practices for theme customization while maintaining update safety.",
        category: "WordPress Themes",
        features: &[
            "1.5 hours of intensive training",
            "Theme installation process",
            "Child theme creation",
            "Safe customization methods",
            "Blueprint setup workflow",
        ],
        specifications: &[
            ("Duration", "1.5 hours"),
            ("Level", "Intermediate"),
            ("Topics", "Themes, child themes, customization"),
            ("Projects", "Theme setup projects"),
            ("Access", "8 months"),
            ("Bonus", "Theme selection guide"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 5,
        name: "WordPress Portfolio Website Development",
        price_cents: 3999,
        description: "Build a professional portfolio website with custom logos, hero images, and optimized layouts.",
        detailed_description: "Create a stunning portfolio website using WordPress. This comprehensive course covers logo creation, hero image setup, portfolio organization, and professional design techniques.",
        category: "WordPress Portfolio",
        features: &[
            "2 comprehensive video modules",
            "3 hours of advanced training",
            "Custom logo creation",
            "Hero image design",
            "Portfolio setup and organization",
            "Professional styling techniques",
        ],
        specifications: &[
            ("Duration", "3 hours"),
            ("Videos", "2 comprehensive modules"),
            ("Level", "Advanced"),
            ("Topics", "Portfolio design, branding, layouts"),
            ("Projects", "Complete portfolio website"),
            ("Access", "10 months"),
            ("Bonus", "Portfolio optimization guide"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 6,
        name: "WordPress Video Integration & Advanced Backgrounds",
        price_cents: 4999,
        description: "Learn to add looping video backgrounds, custom headers, and advanced multimedia integration.",
        detailed_description: "Master advanced WordPress multimedia features including looping video backgrounds, custom header creation, and professional video integration techniques for modern websites.",
        category: "WordPress Video",
        features: &[
            "2 detailed video modules",
            "3.5 hours of video training",
            "Looping video backgrounds",
            "Custom header creation",
            "Multimedia optimization",
            "Performance considerations",
        ],
        specifications: &[
            ("Duration", "3.5 hours"),
            ("Videos", "2 detailed modules"),
            ("Level", "Intermediate"),
            ("Topics", "Video integration, headers, multimedia"),
            ("Tools", "Video editing, compression"),
            ("Access", "12 months"),
            ("Support", "Video optimization guide"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 7,
        name: "WordPress Blog Setup & Content Management",
        price_cents: 5999,
        description: "Master WordPress blogging: posts, categories, tags, comments, and content organization.",
        detailed_description: "Learn comprehensive WordPress blogging including post creation, category and tag management, comment moderation, and effective content organization strategies.",
        category: "WordPress Blogging",
        features: &[
            "2 comprehensive video modules",
            "4 hours of blogging training",
            "Post creation and management",
            "Categories and tags setup",
            "Comment system configuration",
            "Content strategy planning",
        ],
        specifications: &[
            ("Duration", "4 hours"),
            ("Videos", "2 comprehensive modules"),
            ("Level", "Intermediate"),
            ("Topics", "Blogging, posts, categories, comments"),
            ("Projects", "Complete blog setup"),
            ("Access", "12 months"),
            ("Bonus", "Content strategy guide"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 8,
        name: "WordPress Contact Forms & User Interaction",
        price_cents: 6999,
        description: "Create professional contact forms using Contact Form 7 and Gravity Forms for client communication.",
        detailed_description: "Master WordPress contact form creation and configuration. Learn Contact Form 7 installation, customization, and explore premium alternatives like Gravity Forms for advanced functionality.",
        category: "WordPress Forms",
        features: &[
            "3 detailed video modules",
            "5 hours of form training",
            "Contact Form 7 mastery",
            "Gravity Forms introduction",
            "Form customization techniques",
            "User interaction optimization",
        ],
        specifications: &[
            ("Duration", "5 hours"),
            ("Videos", "3 detailed modules"),
            ("Level", "Advanced"),
            ("Topics", "Contact forms, user interaction, plugins"),
            ("Forms", "Multiple form implementations"),
            ("Access", "12 months"),
            ("Bonus", "Form optimization guide"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 9,
        name: "WordPress Hosting & Deployment with Flywheel",
        price_cents: 7999,
        description: "Learn professional WordPress hosting setup, Flywheel deployment, and local-to-live site management.",
        detailed_description: "Master WordPress hosting and deployment using Flywheel. Learn to set up hosting accounts, push/pull sites between local and live environments, and manage professional WordPress deployments.",
        category: "WordPress Hosting",
        features: &[
            "3 comprehensive video modules",
            "6 hours of hosting training",
            "Flywheel hosting setup",
            "Local to live deployment",
            "Site management workflows",
            "Backup and security practices",
        ],
        specifications: &[
            ("Duration", "6 hours"),
            ("Videos", "3 comprehensive modules"),
            ("Level", "Advanced"),
            ("Topics", "Hosting, deployment, site management"),
            ("Projects", "Complete deployment workflow"),
            ("Access", "15 months"),
            ("Bonus", "Hosting comparison guide"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 10,
        name: "WordPress Page Builders & Advanced Customization",
        price_cents: 8999,
        description: "Master WordPress page builders, demo content installation, and advanced template customization.",
        detailed_description: "Learn advanced WordPress customization using page builders, demo content installation, and template-based page creation for rapid website development.",
        category: "WordPress Page Builders",
        features: &[
            "3 detailed video modules",
            "7 hours of page builder training",
            "Page builder mastery",
            "Demo content installation",
            "Template customization",
            "Workflow optimization",
        ],
        specifications: &[
            ("Duration", "7 hours"),
            ("Videos", "3 detailed modules"),
            ("Level", "Advanced"),
            ("Topics", "Page builders, templates, customization"),
            ("Features", "Advanced layouts, content blocks"),
            ("Access", "15 months"),
            ("Bonus", "Page builder comparison guide"),
        ],
        in_stock: true,
    },
    CourseEntry {
        id: 11,
        name: "Real Client WordPress Project: Complete Case Study",
        price_cents: 9999,
        description: "Follow a complete real client WordPress project from backup to final delivery with professional workflows.",
        detailed_description: "Experience a real client WordPress project from start to finish. Learn professional workflows including site backup, theme installation, logo setup, and rapid page creation using templates.",
        category: "WordPress Client Work",
        features: &[
            "4 comprehensive video modules",
            "8 hours of client project training",
            "Real client case study",
            "Professional backup procedures",
            "Theme setup and configuration",
            "Template-based rapid development",
        ],
        specifications: &[
            ("Duration", "8 hours"),
            ("Videos", "4 comprehensive modules"),
            ("Level", "Expert"),
            ("Topics", "Client work, project management, delivery"),
            ("Projects", "Complete client website build"),
            ("Access", "18 months"),
            ("Bonus", "Client workflow templates"),
        ],
        in_stock: true,
    },
];
