use crate::domain::a001_learning_path::ui::details::view_model::LearningPathDetailsVm;
use crate::shared::components::ui::{Button, Radio, RadioState};
use contracts::domain::a001_learning_path::QuizQuestion;
use leptos::prelude::*;

/// Подсветка варианта после проверки. Правильность сверяется по тексту,
/// как при подсчёте баллов: одинаковые тексты подсвечиваются одинаково.
pub fn option_state(checked: bool, is_correct: bool, is_selected: bool) -> RadioState {
    if !checked {
        RadioState::Neutral
    } else if is_correct {
        RadioState::Correct
    } else if is_selected {
        RadioState::Wrong
    } else {
        RadioState::Neutral
    }
}

#[component]
pub fn QuizTab(vm: LearningPathDetailsVm) -> impl IntoView {
    let questions = move || {
        vm.path
            .with(|p| p.as_ref().map(|p| p.quiz_questions.clone()).unwrap_or_default())
    };
    let score = vm.score();
    let answered = move || vm.answers.with(|a| a.answered_count());

    view! {
        <div class="quiz-tab">
            {move || {
                let questions = questions();
                if questions.is_empty() {
                    return view! { <super::EmptyTab text="Вопросов для теста нет" /> }.into_any();
                }
                let total = questions.len();
                view! {
                    <div class="quiz-tab__toolbar">
                        <span>{move || format!("Отвечено: {} из {}", answered(), total)}</span>
                        <Button
                            size="sm"
                            disabled=Signal::derive(move || answered() == 0 || vm.quiz_checked.get())
                            on_click=Callback::new(move |_| vm.check_quiz())
                        >
                            "Проверить ответы"
                        </Button>
                        <Button
                            variant="secondary"
                            size="sm"
                            on_click=Callback::new(move |_| vm.reset_quiz())
                        >
                            "Сбросить"
                        </Button>
                        <Show when=move || vm.quiz_checked.get()>
                            <span class="quiz-tab__score">
                                {move || {
                                    let s = score.get();
                                    format!("Правильно: {} из {} ({}%)", s.correct, s.total, s.percent())
                                }}
                            </span>
                        </Show>
                    </div>
                    {questions
                        .into_iter()
                        .enumerate()
                        .map(|(idx, question)| view! { <QuestionCard vm=vm index=idx question=question /> })
                        .collect_view()}
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn QuestionCard(vm: LearningPathDetailsVm, index: usize, question: QuizQuestion) -> impl IntoView {
    let correct_index = question.correct_index();
    let correct_answer = question.correct_answer.clone();
    let checked = vm.quiz_checked;

    let correct_flags: Vec<bool> = question.options.iter().map(|o| question.is_correct(o)).collect();

    view! {
        <div class="quiz-card">
            <div class="quiz-card__question">
                {format!("{}. {}", index + 1, question.question)}
            </div>
            <div class="form__radio-group">
                {question
                    .options
                    .into_iter()
                    .enumerate()
                    .map(|(opt_idx, option)| {
                        let is_correct = correct_flags[opt_idx];
                        view! {
                            <Radio
                                id=format!("quiz-q{}-o{}", index, opt_idx)
                                name=format!("quiz-q{}", index)
                                label=option
                                checked=Signal::derive(move || {
                                    vm.answers.with(|a| a.selected(index) == Some(opt_idx))
                                })
                                disabled=Signal::derive(move || checked.get())
                                state=Signal::derive(move || {
                                    let selected = vm.answers.with(|a| a.selected(index));
                                    option_state(checked.get(), is_correct, selected == Some(opt_idx))
                                })
                                on_select=Callback::new(move |_| vm.select_answer(index, opt_idx))
                            />
                        }
                    })
                    .collect_view()}
            </div>
            // Ответ сервера может не совпасть ни с одним вариантом
            <Show when=move || checked.get() && correct_index.is_none()>
                <div class="quiz-card__note">
                    {format!("Правильный ответ: {}", correct_answer)}
                </div>
            </Show>
        </div>
    }
}
