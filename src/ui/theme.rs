//! Shared class strings so pages and components stay visually consistent.

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_whatsapp() -> &'static str {
    "inline-flex items-center gap-2 px-5 py-3 rounded-2xl shadow-lg hover:shadow-xl transition focus:outline-none focus:ring text-white bg-emerald-600 hover:bg-emerald-700"
}

pub fn btn_outline() -> &'static str {
    "inline-flex items-center gap-2 px-5 py-3 rounded-2xl border border-white/15 hover:border-white/30 transition bg-slate-900"
}

pub fn btn_small() -> &'static str {
    "text-sm inline-flex items-center gap-2 px-3 py-2 rounded-xl border border-white/15 hover:border-white/30 bg-slate-900"
}

/// Segmented selector button (zone, material, complexity).
pub fn choice(active: bool) -> &'static str {
    if active {
        "px-3 py-2 rounded-xl border border-emerald-400 bg-emerald-400/10"
    } else {
        "px-3 py-2 rounded-xl border border-white/15 hover:border-white/30"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "w-full rounded-xl bg-slate-900 border border-white/15 px-3 py-2 focus:border-emerald-400 focus:outline-none"
}

pub fn checkbox_class() -> &'static str {
    "accent-emerald-500 w-4 h-4"
}

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub fn panel() -> &'static str {
    "rounded-2xl border border-white/10 bg-slate-950 p-4"
}

pub fn card() -> &'static str {
    "rounded-3xl p-6 md:p-8 border border-white/10 shadow-xl bg-slate-950/95"
}

pub fn field_label() -> &'static str {
    "text-sm mb-2 text-slate-300"
}

pub fn muted() -> &'static str {
    "text-xs text-slate-400"
}

pub fn section_title() -> &'static str {
    "text-2xl sm:text-3xl font-bold drop-shadow"
}
