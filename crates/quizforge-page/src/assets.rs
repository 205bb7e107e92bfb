//! Inline stylesheet and quiz runtime for generated pages.
//!
//! The runtime reads two JSON blocks from the page (`quiz-data` and
//! `quiz-config`) and drives a `not-started -> in-progress -> submitted`
//! state machine. Every transition checks the current state first.

pub(crate) const CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; -webkit-tap-highlight-color: transparent; }
[hidden] { display: none !important; }
html, body { width: 100%; min-height: 100%; overflow-x: hidden; }
body { font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); min-height: 100vh; color: #333; line-height: 1.6; }
.container { width: 100%; max-width: 860px; margin: 0 auto; padding: 10px 5px; min-height: 100vh; }
.centered { text-align: center; margin: 12px 0; }
.welcome-screen, header, .question, .result-container { background: rgba(255, 255, 255, 0.95); border-radius: 15px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); border: 1px solid rgba(255, 255, 255, 0.3); margin-bottom: 15px; width: 100%; }
.welcome-screen { text-align: center; padding: 25px 15px; }
.welcome-title { font-size: 1.8rem; font-weight: 700; color: #5a67d8; margin-bottom: 8px; }
.test-name-display { font-size: 1.4rem; font-weight: 600; color: #2d3748; margin-bottom: 8px; }
.category-display, .header-category { color: #718096; margin-bottom: 15px; text-align: center; }
.quiz-stats, .score-breakdown { display: grid; grid-template-columns: repeat(auto-fit, minmax(120px, 1fr)); gap: 10px; margin: 20px 0; }
.stat-card { background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); color: white; padding: 15px 10px; border-radius: 12px; }
.stat-value { font-size: 1.4rem; font-weight: 700; }
.stat-label { font-size: 0.8rem; opacity: 0.9; }
header { padding: 20px 15px; text-align: center; }
.header-chips { display: flex; justify-content: space-around; flex-wrap: wrap; gap: 8px; margin-top: 12px; }
.chip { background: rgba(102, 126, 234, 0.1); color: #667eea; padding: 8px 12px; border-radius: 15px; font-size: 0.8rem; font-weight: 600; }
.timer { display: inline-flex; align-items: center; background: linear-gradient(135deg, #ff6b6b 0%, #ee5a52 100%); color: white; padding: 10px 20px; border-radius: 20px; font-weight: 600; }
.progress-container { margin: 15px 0; background: rgba(255, 255, 255, 0.3); border-radius: 8px; height: 8px; overflow: hidden; }
.progress-bar { height: 100%; width: 0%; background: linear-gradient(90deg, #667eea 0%, #764ba2 100%); transition: width 0.3s ease; }
.question-count { float: right; margin-bottom: 12px; background: linear-gradient(135deg, #4ecdc4 0%, #44a08d 100%); color: white; padding: 6px 12px; border-radius: 15px; font-size: 0.9rem; font-weight: 600; }
.question { clear: both; padding: 20px 15px; }
.question-text { font-size: 1.1rem; font-weight: 500; color: #2d3748; margin-bottom: 20px; }
.options { list-style: none; }
.option { padding: 14px 15px; margin-bottom: 10px; background: rgba(247, 250, 252, 0.8); border: 2px solid rgba(226, 232, 240, 0.5); border-radius: 12px; cursor: pointer; font-weight: 500; transition: all 0.2s ease; }
.option:hover { border-color: #667eea; }
.option.selected { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; border-color: #667eea; }
.navigation { display: flex; justify-content: space-between; gap: 10px; margin-top: 20px; }
button { padding: 12px 20px; border: none; border-radius: 20px; cursor: pointer; font-size: 0.9rem; font-weight: 600; min-width: 110px; color: white; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); }
button:disabled { background: #b0b0b0; cursor: not-allowed; opacity: 0.6; }
#prev-btn { background: linear-gradient(135deg, #a0aec0 0%, #718096 100%); }
#prev-btn:disabled { background: #b0b0b0; }
.start-btn, .restart-btn { padding: 14px 30px; font-size: 1.1rem; width: 90%; max-width: 300px; margin-top: 15px; }
.submit-btn { display: none; width: 90%; max-width: 250px; background: linear-gradient(135deg, #1cc88a 0%, #17a673 100%); }
.submit-btn.visible { display: inline-block; }
.result-container { text-align: center; padding: 30px 20px; }
.score { font-size: 2.5rem; font-weight: 800; color: #5a67d8; margin: 15px 0; }
.performance-message { margin: 15px 0; }
.breakdown-item { padding: 15px 10px; border-radius: 12px; color: white; font-weight: 600; }
.breakdown-item.correct { background: linear-gradient(135deg, #48bb78 0%, #38a169 100%); }
.breakdown-item.incorrect { background: linear-gradient(135deg, #f56565 0%, #e53e3e 100%); }
.breakdown-item.skipped { background: linear-gradient(135deg, #ed8936 0%, #dd6b20 100%); }
.review { text-align: left; margin: 20px 0; }
.review summary { cursor: pointer; font-weight: 600; }
.review-list { margin: 12px 0 0 20px; }
.review-list li { margin-bottom: 12px; padding-left: 8px; border-left: 4px solid #ed8936; }
.review-list li.correct { border-color: #48bb78; }
.review-list li.incorrect { border-color: #f56565; }
.review-question { font-weight: 600; }
@media (max-width: 480px) {
  .navigation { flex-direction: column; gap: 8px; }
  button { width: 100%; min-width: auto; }
  .quiz-stats, .score-breakdown { grid-template-columns: 1fr; }
}
"#;

pub(crate) const JS: &str = r#"
(function () {
  'use strict';

  const State = Object.freeze({
    NOT_STARTED: 'not-started',
    IN_PROGRESS: 'in-progress',
    SUBMITTED: 'submitted'
  });

  const questions = JSON.parse(document.getElementById('quiz-data').textContent);
  const config = JSON.parse(document.getElementById('quiz-config').textContent);
  const total = questions.length;
  const submitAfter = Math.min(config.submitThreshold, total);

  const quiz = {
    state: State.NOT_STARTED,
    current: 0,
    answers: new Array(total).fill(null),
    timeLeft: config.durationSeconds,
    timer: null,
    result: null
  };

  function byId(id) {
    return document.getElementById(id);
  }

  function showPanel() {
    byId('welcome-screen').hidden = quiz.state !== State.NOT_STARTED;
    byId('quiz-interface').hidden = quiz.state !== State.IN_PROGRESS;
    byId('result-container').hidden = quiz.state !== State.SUBMITTED;
  }

  function pad(n) {
    return n.toString().padStart(2, '0');
  }

  function updateTimerDisplay() {
    const hours = Math.floor(quiz.timeLeft / 3600);
    const minutes = Math.floor((quiz.timeLeft % 3600) / 60);
    const seconds = quiz.timeLeft % 60;
    byId('time-display').textContent = pad(hours) + ':' + pad(minutes) + ':' + pad(seconds);
  }

  function answeredCount() {
    return quiz.answers.filter(function (a) { return a !== null; }).length;
  }

  function isLast() {
    return quiz.current >= total - 1;
  }

  function canSubmit() {
    return quiz.state === State.IN_PROGRESS && (answeredCount() >= submitAfter || isLast());
  }

  function updateSubmitButtons() {
    const visible = canSubmit();
    document.querySelectorAll('.submit-btn').forEach(function (btn) {
      btn.classList.toggle('visible', visible);
    });
  }

  function showQuestion() {
    const question = questions[quiz.current];
    if (!question) {
      updateSubmitButtons();
      return;
    }

    byId('progress-bar').style.width = ((quiz.current + 1) / total) * 100 + '%';
    byId('question-count').textContent = 'Question ' + (quiz.current + 1) + '/' + total;
    byId('question-text').textContent = question.text;

    const list = byId('options');
    list.replaceChildren();
    question.options.forEach(function (option, i) {
      const number = String(i + 1);
      const item = document.createElement('li');
      item.className = 'option';
      if (quiz.answers[quiz.current] === number) {
        item.classList.add('selected');
      }
      item.dataset.option = number;
      item.textContent = option;
      list.appendChild(item);
    });

    byId('prev-btn').disabled = quiz.current === 0;
    byId('next-btn').disabled = isLast();
    updateSubmitButtons();
  }

  function stopTimer() {
    if (quiz.timer !== null) {
      clearInterval(quiz.timer);
      quiz.timer = null;
    }
  }

  function start() {
    if (quiz.state !== State.NOT_STARTED) return false;
    quiz.state = State.IN_PROGRESS;
    showPanel();
    updateTimerDisplay();
    showQuestion();
    quiz.timer = setInterval(tick, 1000);
    return true;
  }

  function tick() {
    if (quiz.state !== State.IN_PROGRESS) return false;
    quiz.timeLeft = Math.max(0, quiz.timeLeft - 1);
    updateTimerDisplay();
    if (quiz.timeLeft === 0) {
      finish();
      return true;
    }
    return false;
  }

  function select(option) {
    if (quiz.state !== State.IN_PROGRESS) return false;
    const number = String(option);
    if (!/^[1-4]$/.test(number) || quiz.current >= total) return false;
    quiz.answers[quiz.current] = number;
    showQuestion();
    return true;
  }

  function next() {
    if (quiz.state !== State.IN_PROGRESS || isLast()) return false;
    quiz.current++;
    showQuestion();
    return true;
  }

  function prev() {
    if (quiz.state !== State.IN_PROGRESS || quiz.current === 0) return false;
    quiz.current--;
    showQuestion();
    return true;
  }

  function submit() {
    if (quiz.state !== State.IN_PROGRESS) return false;
    if (!window.confirm(config.confirmMessage)) return false;
    finish();
    return true;
  }

  function classify() {
    const result = { correct: 0, incorrect: 0, skipped: 0, total: total };
    questions.forEach(function (question, i) {
      const answer = quiz.answers[i];
      if (answer === null) {
        result.skipped++;
      } else if (answer === question.correct_option) {
        result.correct++;
      } else {
        result.incorrect++;
      }
    });
    return result;
  }

  function performanceMessage(percent) {
    for (const tier of config.tiers) {
      if (percent >= tier.minPercent) return tier.message;
    }
    return '';
  }

  function optionLabel(question, token) {
    const option = question.options[Number(token) - 1];
    return option === undefined ? token : token + '. ' + option;
  }

  function reviewLine(label, value) {
    const line = document.createElement('p');
    line.textContent = label + ': ' + value;
    return line;
  }

  function renderReview() {
    const list = byId('review-list');
    list.replaceChildren();
    questions.forEach(function (question, i) {
      const answer = quiz.answers[i];
      const item = document.createElement('li');
      if (answer === null) {
        item.className = 'skipped';
      } else {
        item.className = answer === question.correct_option ? 'correct' : 'incorrect';
      }

      const text = document.createElement('p');
      text.className = 'review-question';
      text.textContent = question.text;

      item.append(
        text,
        reviewLine('Your answer', answer === null ? 'Not answered' : optionLabel(question, answer)),
        reviewLine('Correct answer', optionLabel(question, question.correct_option)),
        reviewLine('Solution', question.solution)
      );
      list.appendChild(item);
    });
  }

  function finish() {
    if (quiz.state !== State.IN_PROGRESS) return null;
    stopTimer();
    quiz.state = State.SUBMITTED;

    const result = classify();
    quiz.result = result;
    const percent = total === 0 ? 0 : (result.correct / total) * 100;

    byId('score').textContent = result.correct + '/' + total;
    byId('correct-count').textContent = result.correct;
    byId('incorrect-count').textContent = result.incorrect;
    byId('skipped-count').textContent = result.skipped;
    byId('result-message').textContent = performanceMessage(percent);
    renderReview();
    updateSubmitButtons();
    showPanel();
    return result;
  }

  function restart() {
    if (quiz.state !== State.SUBMITTED) return false;
    stopTimer();
    quiz.state = State.NOT_STARTED;
    quiz.current = 0;
    quiz.answers = new Array(total).fill(null);
    quiz.timeLeft = config.durationSeconds;
    quiz.result = null;
    byId('progress-bar').style.width = '0%';
    updateTimerDisplay();
    updateSubmitButtons();
    showPanel();
    return true;
  }

  function snapshot() {
    return {
      state: quiz.state,
      current: quiz.current,
      answers: quiz.answers.slice(),
      timeLeft: quiz.timeLeft,
      canSubmit: canSubmit(),
      result: quiz.result
    };
  }

  document.addEventListener('click', function (event) {
    const option = event.target.closest('[data-option]');
    if (option) {
      select(option.dataset.option);
      return;
    }

    const control = event.target.closest('[data-action]');
    if (!control) return;
    switch (control.dataset.action) {
      case 'start': start(); break;
      case 'next': next(); break;
      case 'prev': prev(); break;
      case 'submit': submit(); break;
      case 'restart': restart(); break;
    }
  });

  window.quizRuntime = {
    State: State,
    start: start,
    select: select,
    next: next,
    prev: prev,
    submit: submit,
    tick: tick,
    restart: restart,
    snapshot: snapshot
  };

  showPanel();
  updateTimerDisplay();
})();
"#;
