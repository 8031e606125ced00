//! Auth Form Field Sets
//!
//! Login and signup field sets for each role. All inputs are uncontrolled;
//! only the native `required` attribute gates submission.

use leptos::prelude::*;

/// Gender options as (value, label) pairs
const GENDERS: &[(&str, &str)] = &[
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
];

/// Blood group options
const BLOOD_GROUPS: &[(&str, &str)] = &[
    ("A+", "A+"),
    ("A-", "A-"),
    ("B+", "B+"),
    ("B-", "B-"),
    ("AB+", "AB+"),
    ("AB-", "AB-"),
    ("O+", "O+"),
    ("O-", "O-"),
];

/// Email + password pair, shared by both roles
#[component]
pub fn LoginForm() -> impl IntoView {
    view! {
        <FormField label="Email" input_type="email" placeholder="Enter your email" />
        <FormField label="Password" input_type="password" placeholder="Enter your password" />
    }
}

/// Patient signup field set (ABHA ID, demographics, blood group, address)
#[component]
pub fn PatientSignupForm() -> impl IntoView {
    view! {
        <FormField label="ABHA ID" placeholder="Enter your ABHA ID" />
        <FormField label="Full Name" placeholder="Enter your full name" />
        <FormField label="Email" input_type="email" placeholder="Enter your email" />
        <FormField label="Password" input_type="password" placeholder="Enter your password" />
        <FormField label="Contact Number" input_type="tel" placeholder="Enter your contact number" />
        <FormField label="Date of Birth" input_type="date" />
        <SelectField label="Gender" prompt="Select gender" options=GENDERS />
        <SelectField label="Blood Group" prompt="Select blood group" options=BLOOD_GROUPS />
        <div class="form-field">
            <label>"Address"</label>
            <textarea rows="3" placeholder="Enter your address" required=true></textarea>
        </div>
    }
}

/// Doctor signup field set (NMR ID, specialization, hospital details)
#[component]
pub fn DoctorSignupForm() -> impl IntoView {
    view! {
        <FormField label="NMR ID" placeholder="Enter your NMR ID" />
        <FormField label="Full Name" placeholder="Enter your full name" />
        <FormField label="Email" input_type="email" placeholder="Enter your email" />
        <FormField label="Password" input_type="password" placeholder="Enter your password" />
        <FormField label="Contact Number" input_type="tel" placeholder="Enter your contact number" />
        <FormField label="Specialization" placeholder="Enter your specialization" />
        <FormField label="Experience (years)" input_type="number" placeholder="Enter years of experience" />
        <SelectField label="Gender" prompt="Select gender" options=GENDERS />
        <FormField label="Current Hospital" placeholder="Enter current hospital name" />
        <FormField label="Hospital ID" placeholder="Enter your hospital ID" />
    }
}

/// Labeled required input row
#[component]
fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input type=input_type placeholder=placeholder required=true />
        </div>
    }
}

/// Labeled required select row over (value, label) pairs
#[component]
fn SelectField(
    label: &'static str,
    prompt: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <select required=true>
                <option value="">{prompt}</option>
                {options
                    .iter()
                    .map(|(value, caption)| view! { <option value=*value>{*caption}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
