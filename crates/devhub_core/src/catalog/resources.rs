//! CDN link catalog.

use super::CdnResource;

pub const CDN_RESOURCES: &[CdnResource] = &[
    // CSS frameworks
    CdnResource {
        name: "Tailwind CSS",
        description: "Utility-first CSS framework",
        url: "https://cdn.tailwindcss.com",
        category: "css",
        version: None,
        popular: true,
    },
    CdnResource {
        name: "Bootstrap",
        description: "Popular CSS framework",
        url: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css",
        category: "css",
        version: Some("5.3.2"),
        popular: true,
    },
    CdnResource {
        name: "Bulma",
        description: "Modern CSS framework based on Flexbox",
        url: "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css",
        category: "css",
        version: Some("0.9.4"),
        popular: false,
    },
    // JavaScript libraries
    CdnResource {
        name: "jQuery",
        description: "Fast, small, and feature-rich JavaScript library",
        url: "https://cdn.jsdelivr.net/npm/jquery@3.7.1/dist/jquery.min.js",
        category: "javascript",
        version: Some("3.7.1"),
        popular: true,
    },
    CdnResource {
        name: "React",
        description: "JavaScript library for building user interfaces",
        url: "https://unpkg.com/react@18/umd/react.production.min.js",
        category: "javascript",
        version: Some("18"),
        popular: true,
    },
    CdnResource {
        name: "Vue.js",
        description: "Progressive JavaScript framework",
        url: "https://cdn.jsdelivr.net/npm/vue@3.3.8/dist/vue.global.prod.js",
        category: "javascript",
        version: Some("3.3.8"),
        popular: true,
    },
    // Animation libraries
    CdnResource {
        name: "AOS (Animate On Scroll)",
        description: "Animate elements on scroll",
        url: "https://cdn.jsdelivr.net/npm/aos@2.3.4/dist/aos.css",
        category: "animation",
        version: Some("2.3.4"),
        popular: true,
    },
    CdnResource {
        name: "Animate.css",
        description: "Cross-browser CSS animations",
        url: "https://cdn.jsdelivr.net/npm/animate.css@4.1.1/animate.min.css",
        category: "animation",
        version: Some("4.1.1"),
        popular: true,
    },
    CdnResource {
        name: "GSAP",
        description: "Professional-grade animation library",
        url: "https://cdn.jsdelivr.net/npm/gsap@3.12.2/dist/gsap.min.js",
        category: "animation",
        version: Some("3.12.2"),
        popular: true,
    },
    // Helpful sites
    CdnResource {
        name: "Animista",
        description: "CSS animations on demand",
        url: "https://animista.net",
        category: "animation-help",
        version: None,
        popular: true,
    },
    CdnResource {
        name: "CSS-Tricks",
        description: "Tips, tricks, and techniques on CSS",
        url: "https://css-tricks.com",
        category: "css-help",
        version: None,
        popular: true,
    },
    CdnResource {
        name: "HTML5 UP",
        description: "Responsive HTML5 and CSS3 site templates",
        url: "https://html5up.net",
        category: "themes",
        version: None,
        popular: true,
    },
    CdnResource {
        name: "shadcn/ui",
        description: "Beautifully designed components",
        url: "https://ui.shadcn.com",
        category: "components",
        version: None,
        popular: true,
    },
];
