//! Static site copy: brand, contact details, services.

pub const BRAND_NAME: &str = "Blue Whale Investment";

pub const CONTACT_EMAIL: &str = "info@bluewhaleinvestment.com.np";
pub const CONTACT_PHONE: &str = "+977 9851069535";
pub const CONTACT_ADDRESS: &str = "Nagarjun Tole, Bafal-13, Kathmandu, Nepal";

pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Property Investment Advisory",
        icon: "🏘️",
        description: "Expert guidance on investing in residential and \
                      commercial real estate across Nepal.",
        features: &[
            "Local market insights",
            "Feasibility studies",
            "ROI projections",
            "Custom investment plans",
        ],
    },
    Service {
        title: "Land Acquisition Support",
        icon: "🗺️",
        description: "We assist you in identifying and acquiring legally \
                      verified land in strategic locations.",
        features: &[
            "Due diligence and title verification",
            "Location scouting",
            "Zoning & regulatory checks",
            "Purchase negotiation support",
        ],
    },
    Service {
        title: "Project Development Services",
        icon: "🏗️",
        description: "End-to-end support for real estate development, from \
                      planning to project execution.",
        features: &[
            "Architectural planning",
            "Contractor liaison",
            "Regulatory compliance",
            "Quality assurance",
        ],
    },
    Service {
        title: "Rental Property Management",
        icon: "🏠",
        description: "Manage and grow your rental property portfolio with \
                      our reliable property management services.",
        features: &[
            "Tenant sourcing",
            "Rental agreements",
            "Rent collection",
            "Occupancy tracking",
        ],
    },
    Service {
        title: "Portfolio Diversification",
        icon: "📈",
        description: "Diversify your investment portfolio with strategic \
                      real estate assets across Nepal.",
        features: &[
            "Mixed-use properties",
            "Tourism real estate",
            "Agricultural lands",
            "Commercial spaces",
        ],
    },
    Service {
        title: "Legal & Financial Consultation",
        icon: "📜",
        description: "Professional legal and financial advisors to ensure \
                      safe and smart investment decisions.",
        features: &[
            "Legal vetting",
            "Tax and compliance guidance",
            "Banking and loan assistance",
            "Investment structuring",
        ],
    },
];

/// Investment ranges offered in the contact form.
pub const INVESTMENT_RANGES: &[&str] = &[
    "Under 50 Lakh",
    "50 Lakh - 1 Crore",
    "1 - 5 Crore",
    "Above 5 Crore",
];

/// Property interests offered in the contact form.
pub const PROPERTY_TYPES: &[&str] =
    &["Land", "Residential", "Commercial", "Rental", "Other"];
