// ============================================================================
// LOGIN VIEW
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{append_child, create_element, input_value, on_input, on_submit, set_class_name, ElementBuilder};
use crate::error::ValidationError;
use crate::state::{AppState, Route};
use crate::viewmodels::{LoginOutcome, LoginViewModel};

pub fn render_login(state: &AppState, vm: &LoginViewModel) -> Result<Element, JsValue> {
    let form_values = vm.form();
    let error = vm.error();
    let submitting = vm.is_submitting();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("Welcome Back").build())?
        .child(
            ElementBuilder::new("p")?
                .text("Sign in to your Pet Store account")
                .build(),
        )?
        .build();

    let form = create_element("form")?;
    set_class_name(&form, "login-form");
    form.set_attribute("autocomplete", "off")?;

    let email = render_field(
        "email",
        "Email",
        "text",
        "Enter your email",
        &form_values.email,
        error.as_ref(),
    )?;
    {
        let vm = vm.clone();
        on_input(&email.input, move |e| vm.set_email(&input_value(e.target())))?;
    }

    let password = render_field(
        "password",
        "Password",
        "password",
        "Enter your password",
        &form_values.password,
        error.as_ref(),
    )?;
    {
        let vm = vm.clone();
        on_input(&password.input, move |e| vm.set_password(&input_value(e.target())))?;
    }

    let submit = ElementBuilder::new("button")?
        .class("login-button")
        .attr("type", "submit")?
        .flag("disabled", submitting)?
        .text(if submitting { "Signing in..." } else { "Sign In" })
        .build();

    append_child(&form, &email.group)?;
    append_child(&form, &password.group)?;
    append_child(&form, &submit)?;

    {
        let vm = vm.clone();
        let delay_ms = state.config.auth.login_delay_ms;
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                if let LoginOutcome::SignedIn(_) = vm.submit(TimeoutFuture::new(delay_ms)).await {
                    navigate(Route::PetList);
                }
            });
        })?;
    }

    let card = ElementBuilder::new("div")?
        .class("login-card")
        .child(header)?
        .child(render_demo_hint(state)?)?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-container")
        .child(card)?
        .build())
}

fn render_demo_hint(state: &AppState) -> Result<Element, JsValue> {
    let auth = &state.config.auth;
    let line = |label: &str, value: &str| -> Result<Element, JsValue> {
        Ok(ElementBuilder::new("div")?
            .text(label)
            .child(ElementBuilder::new("strong")?.text(value).build())?
            .build())
    };

    Ok(ElementBuilder::new("div")?
        .class("demo-info")
        .child(ElementBuilder::new("strong")?.text("Demo Credentials:").build())?
        .child(line("Email: ", &auth.demo_email)?)?
        .child(line("Password: ", &auth.demo_password)?)?
        .build())
}

struct Field {
    group: Element,
    input: Element,
}

fn render_field(
    id: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    error: Option<&ValidationError>,
) -> Result<Field, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .build();

    let group = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(input.clone())?
        .build();

    if let Some(error) = error.filter(|e| e.field == id) {
        let message = ElementBuilder::new("div")?
            .class("form-error")
            .text(&error.message)
            .build();
        append_child(&group, &message)?;
    }

    Ok(Field { group, input })
}
