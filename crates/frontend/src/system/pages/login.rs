use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Страница входа. Только форма: учётные данные никуда не отправляются.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("Sign in as {}", email.get_untracked());
        navigate("/", Default::default());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"BCRM"</h1>
                <h2>"Sign in to your account"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="name@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">"Sign in"</button>
                </form>
            </div>
        </div>
    }
}
