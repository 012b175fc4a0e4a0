//! Static slide content for every tour.

/// Headline figure shown beside a slide's points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

/// One slide as authored.
#[derive(Clone, Copy, Debug)]
pub struct SlideSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kicker: &'static str,
    pub lead: &'static str,
    pub points: &'static [&'static str],
    pub stat: Option<Stat>,
}

/// Rendered payload of a tour slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideBody {
    pub kicker: &'static str,
    pub lead: &'static str,
    pub points: &'static [&'static str],
    pub stat: Option<Stat>,
}

impl From<&SlideSpec> for SlideBody {
    fn from(spec: &SlideSpec) -> Self {
        Self { kicker: spec.kicker, lead: spec.lead, points: spec.points, stat: spec.stat }
    }
}

const fn stat(value: &'static str, caption: &'static str) -> Option<Stat> {
    Some(Stat { value, caption })
}

pub const COMPLIANCE: &[SlideSpec] = &[
    SlideSpec {
        id: "compliance-intro",
        title: "Stay audit-ready",
        kicker: "Compliance",
        lead: "Every certificate, permit and lien waiver in one place, tied to the job it covers.",
        points: &["Track insurance certificates by subcontractor", "Permit status per project phase", "Expiry reminders before work stops"],
        stat: None,
    },
    SlideSpec {
        id: "compliance-waivers",
        title: "Lien waivers without the chase",
        kicker: "Compliance",
        lead: "Conditional and unconditional waivers are matched to each pay application.",
        points: &["Waiver requests go out with the pay app", "Missing waivers block release of payment", "Signed copies attach to the draw"],
        stat: stat("0", "payments released without a waiver"),
    },
    SlideSpec {
        id: "compliance-certified-payroll",
        title: "Certified payroll",
        kicker: "Compliance",
        lead: "Prevailing-wage reports assemble from the timecards your crews already submit.",
        points: &["Weekly WH-347 export", "Rate checks against the wage determination"],
        stat: None,
    },
    SlideSpec {
        id: "compliance-finish",
        title: "Open the compliance log",
        kicker: "Ready",
        lead: "Start with the projects that have documents expiring this month.",
        points: &[],
        stat: None,
    },
];

pub const CORE_TAB: &[SlideSpec] = &[
    SlideSpec {
        id: "core-overview",
        title: "Your jobs at a glance",
        kicker: "Core",
        lead: "The core tab lists every active job with its current stage and target date.",
        points: &["Search by project, client or location", "Filter by stage status", "Sort any column"],
        stat: None,
    },
    SlideSpec {
        id: "core-stages",
        title: "Stages that mean something",
        kicker: "Core",
        lead: "Foundations, framing, enclosure: each stage carries its own percent complete and target.",
        points: &["Put a stage on hold without losing its progress", "Target dates flag when they slip"],
        stat: stat("4", "stage statuses, one workflow"),
    },
    SlideSpec {
        id: "core-inline-edit",
        title: "Edit in place",
        kicker: "Core",
        lead: "Click a cell to change it. Enter saves, Escape cancels.",
        points: &["Numbers, dates and statuses are checked before they save", "Invalid input stays open with a message"],
        stat: None,
    },
    SlideSpec {
        id: "core-finish",
        title: "Go to stage tracking",
        kicker: "Ready",
        lead: "Your jobs are already loaded.",
        points: &[],
        stat: None,
    },
];

pub const FIELD_MANAGEMENT: &[SlideSpec] = &[
    SlideSpec {
        id: "field-deliveries",
        title: "Know what is on the truck",
        kicker: "Field",
        lead: "Every material delivery, its supplier and the site it is headed to.",
        points: &["Scheduled, in transit, delivered or delayed", "Quantities editable from the yard"],
        stat: None,
    },
    SlideSpec {
        id: "field-delays",
        title: "Catch delays early",
        kicker: "Field",
        lead: "Delayed deliveries surface on the dashboard before the crew shows up to an empty pad.",
        points: &["Filter to delayed in one click", "Sort by scheduled date to plan the week"],
        stat: stat("1 day", "average notice gained on a late pour"),
    },
    SlideSpec {
        id: "field-daily-log",
        title: "Daily logs from the field",
        kicker: "Field",
        lead: "Weather, manpower and deliveries recorded once and shared with the office.",
        points: &["Photos attach to the log entry", "Superintendent sign-off per day"],
        stat: None,
    },
    SlideSpec {
        id: "field-finish",
        title: "Open delivery tracking",
        kicker: "Ready",
        lead: "See what arrives this week.",
        points: &[],
        stat: None,
    },
];

pub const FINANCIAL: &[SlideSpec] = &[
    SlideSpec {
        id: "financial-estimates",
        title: "Estimates to approvals",
        kicker: "Financial",
        lead: "Track every estimate from draft through client approval.",
        points: &["Amount and margin side by side", "Approved value rolls up to the dashboard"],
        stat: None,
    },
    SlideSpec {
        id: "financial-margin",
        title: "Protect your margin",
        kicker: "Financial",
        lead: "Sort by margin to see which bids are priced too thin before they go out.",
        points: &["Margins edit inline as a percent", "Rejected estimates stay on record for comparison"],
        stat: stat("7.5%", "median margin across approved work"),
    },
    SlideSpec {
        id: "financial-cost-codes",
        title: "Cost codes that match the field",
        kicker: "Financial",
        lead: "Budgets, commitments and actuals share one cost code structure.",
        points: &["CSI divisions out of the box", "Variance by code at any time"],
        stat: None,
    },
    SlideSpec {
        id: "financial-finish",
        title: "Review estimates",
        kicker: "Ready",
        lead: "Start with what is pending approval.",
        points: &[],
        stat: None,
    },
];

pub const HR: &[SlideSpec] = &[
    SlideSpec {
        id: "hr-crews",
        title: "Crews and certifications",
        kicker: "HR",
        lead: "Know who is qualified for the lift, the confined space and the scaffold.",
        points: &["Certifications with expiry dates", "Crew rosters per project"],
        stat: None,
    },
    SlideSpec {
        id: "hr-onboarding",
        title: "Onboarding on day one",
        kicker: "HR",
        lead: "New hires complete paperwork and site orientation from their phone.",
        points: &["I-9 and W-4 collection", "Orientation sign-off tracked per site"],
        stat: stat("30 min", "typical onboarding time"),
    },
    SlideSpec {
        id: "hr-finish",
        title: "Back to the dashboard",
        kicker: "Ready",
        lead: "Your people, your projects, one login.",
        points: &[],
        stat: None,
    },
];

pub const IT_COMMAND_CENTER: &[SlideSpec] = &[
    SlideSpec {
        id: "it-devices",
        title: "Every device on every site",
        kicker: "IT Command Center",
        lead: "Tablets, trailers and access points inventoried by job site.",
        points: &["Assign devices to crews", "Flag devices that have not checked in"],
        stat: None,
    },
    SlideSpec {
        id: "it-access",
        title: "Access that follows the job",
        kicker: "IT Command Center",
        lead: "Grant project access when someone joins a job and remove it when they leave.",
        points: &["Role templates for field and office", "Audit trail of every change"],
        stat: None,
    },
    SlideSpec {
        id: "it-uptime",
        title: "Trailer connectivity",
        kicker: "IT Command Center",
        lead: "See which sites are offline before the superintendent calls.",
        points: &["Per-site link status", "Outage history"],
        stat: stat("99.5%", "site uptime target"),
    },
    SlideSpec {
        id: "it-finish",
        title: "Open the command center",
        kicker: "Ready",
        lead: "Everything is already connected.",
        points: &[],
        stat: None,
    },
];

pub const PRE_CONSTRUCTION: &[SlideSpec] = &[
    SlideSpec {
        id: "precon-pipeline",
        title: "Your bid pipeline",
        kicker: "Pre-Construction",
        lead: "Every bid with its client, budget, estimator and due date.",
        points: &["Draft, submitted, under review, awarded or lost", "Pipeline value on the dashboard"],
        stat: None,
    },
    SlideSpec {
        id: "precon-due-dates",
        title: "Never miss a bid date",
        kicker: "Pre-Construction",
        lead: "Days until due are computed for every bid, and the dashboard counts what is due in the next two weeks.",
        points: &["Sort by due date", "Overdue bids stand out"],
        stat: stat("14 days", "due-soon window"),
    },
    SlideSpec {
        id: "precon-takeoff",
        title: "Takeoff to estimate",
        kicker: "Pre-Construction",
        lead: "Quantities from the takeoff flow straight into the estimate.",
        points: &["Assemblies for common scopes", "Sub quotes leveled side by side"],
        stat: None,
    },
    SlideSpec {
        id: "precon-finish",
        title: "Go to bid management",
        kicker: "Ready",
        lead: "Your open bids are waiting.",
        points: &[],
        stat: None,
    },
];

pub const SAFETY: &[SlideSpec] = &[
    SlideSpec {
        id: "safety-observations",
        title: "Observations from anyone",
        kicker: "Safety",
        lead: "Anyone on site can log a hazard with a photo in under a minute.",
        points: &["Positive and negative observations", "Corrective actions assigned on the spot"],
        stat: None,
    },
    SlideSpec {
        id: "safety-toolbox",
        title: "Toolbox talks",
        kicker: "Safety",
        lead: "Weekly talks scheduled, delivered and signed without paper.",
        points: &["Topic library", "Attendance captured by crew"],
        stat: stat("52", "talks a year, all on record"),
    },
    SlideSpec {
        id: "safety-incidents",
        title: "Incident reporting",
        kicker: "Safety",
        lead: "Incidents and near misses reported the same day, with OSHA 300 logs built for you.",
        points: &["Root cause workflow", "Recordable rate by project"],
        stat: None,
    },
    SlideSpec {
        id: "safety-finish",
        title: "Back to the dashboard",
        kicker: "Ready",
        lead: "Safety starts with the next observation.",
        points: &[],
        stat: None,
    },
];

pub const QUALITY: &[SlideSpec] = &[
    SlideSpec {
        id: "quality-punch",
        title: "Punch lists that close",
        kicker: "Quality",
        lead: "Punch items pinned to the drawing and assigned to the responsible trade.",
        points: &["Photo before and after", "Closeout status per area"],
        stat: None,
    },
    SlideSpec {
        id: "quality-inspections",
        title: "Inspections",
        kicker: "Quality",
        lead: "Checklists for every inspection point, from rebar to final.",
        points: &["Pass, fail or needs attention", "Failed items become punch items"],
        stat: None,
    },
    SlideSpec {
        id: "quality-warranty",
        title: "Warranty after turnover",
        kicker: "Warranty",
        lead: "Owner requests routed to the right subcontractor during the warranty period.",
        points: &["Warranty terms per scope", "Response time tracking"],
        stat: stat("1 year", "standard warranty tracked automatically"),
    },
    SlideSpec {
        id: "quality-finish",
        title: "Back to the dashboard",
        kicker: "Ready",
        lead: "Build it right the first time.",
        points: &[],
        stat: None,
    },
];

pub const EXECUTIVE_PITCH: &[SlideSpec] = &[
    SlideSpec {
        id: "pitch-problem",
        title: "Construction runs on spreadsheets",
        kicker: "The problem",
        lead: "Bids, deliveries and job progress live in different files owned by different people.",
        points: &["No single view of the pipeline", "Field and office out of sync"],
        stat: None,
    },
    SlideSpec {
        id: "pitch-solution",
        title: "One workspace for the whole job",
        kicker: "The solution",
        lead: "From first bid to final warranty call, every record shares one model.",
        points: &["Pre-construction, field and financial in one place", "Edits visible to everyone immediately"],
        stat: None,
    },
    SlideSpec {
        id: "pitch-market",
        title: "A large, underserved market",
        kicker: "Market",
        lead: "Mid-size general contractors are too big for spreadsheets and too small for enterprise suites.",
        points: &["Regional GCs with 20 to 200 employees", "Specialty contractors running multiple jobs"],
        stat: stat("$1.8T", "annual U.S. construction spend"),
    },
    SlideSpec {
        id: "pitch-traction",
        title: "Traction",
        kicker: "Traction",
        lead: "Pilot customers run their active jobs in the workspace every day.",
        points: &["Weekly active use across every pilot", "Bid pipeline tracked end to end"],
        stat: stat("12", "pilot contractors"),
    },
    SlideSpec {
        id: "pitch-ask",
        title: "See it live",
        kicker: "Next step",
        lead: "Open the dashboard and walk a real pipeline.",
        points: &[],
        stat: None,
    },
];

pub const EXAMPLE: &[SlideSpec] = &[
    SlideSpec {
        id: "example-welcome",
        title: "Welcome to SiteDeck",
        kicker: "Getting started",
        lead: "A quick look around before you dive in.",
        points: &["Arrow keys move between slides", "Escape leaves the tour at any time"],
        stat: None,
    },
    SlideSpec {
        id: "example-dashboard",
        title: "The dashboard",
        kicker: "Getting started",
        lead: "Active bids, pipeline value, deliveries in transit and bids due soon.",
        points: &["Each card links to its tab"],
        stat: None,
    },
    SlideSpec {
        id: "example-finish",
        title: "You are all set",
        kicker: "Ready",
        lead: "Press Enter or click Get started.",
        points: &[],
        stat: None,
    },
];
